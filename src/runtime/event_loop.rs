use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{MediaElement, PlaybackController};
use crate::config;
use crate::error::PlayerError;
use crate::ui;

/// Main terminal event loop: pumps the controller, draws, and dispatches
/// key presses. Returns `Ok(())` when shutdown is requested.
pub fn run<M: MediaElement>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut PlaybackController<M>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        pump(app, player, Instant::now());

        terminal.draw(|f| ui::draw(f, app, player, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Surface a controller result in the status line; errors never stop the loop.
fn report(app: &mut App, result: Result<(), PlayerError>) {
    match result {
        Ok(()) => app.clear_status(),
        Err(e) => {
            log::warn!("{e}");
            app.set_status(e.to_string());
        }
    }
}

/// Run the controller's periodic work and keep the cursor on a track that
/// was advanced to automatically.
fn pump<M: MediaElement>(app: &mut App, player: &mut PlaybackController<M>, now: Instant) {
    let before = player.current_index();
    let ticked = player.tick(now);
    if ticked.is_err() {
        report(app, ticked);
    }
    if player.current_index() != before {
        follow_playback(app, player);
    }
}

/// Keep the cursor on the playing track when its list is on screen.
fn follow_playback<M: MediaElement>(app: &mut App, player: &PlaybackController<M>) {
    if app.view == app.playing_view {
        app.set_selected(player.current_index());
    }
}

/// Play the selected row, switching the controller to the visible list first.
fn play_selected<M: MediaElement>(
    app: &mut App,
    player: &mut PlaybackController<M>,
) -> Result<(), PlayerError> {
    if app.view != app.playing_view {
        log::info!("switching playback to the {:?} list", app.view);
        app.playing_view = app.view;
        player.replace_tracks(app.visible_tracks().to_vec());
    }
    player.select(app.selected)
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub(super) fn handle_key_event<M: MediaElement>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut PlaybackController<M>,
) -> bool {
    let seek_step = f64::from(settings.controls.seek_step_percent);
    let volume_step = f64::from(settings.controls.volume_step_percent);

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            let r = player.play_pause();
            report(app, r);
        }
        KeyCode::Char('l') => {
            let r = player.next_track();
            report(app, r);
            follow_playback(app, player);
        }
        KeyCode::Char('h') => {
            let r = player.prev_track();
            report(app, r);
            follow_playback(app, player);
        }
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter => {
            if app.has_tracks() {
                let r = play_selected(app, player);
                report(app, r);
            }
        }
        KeyCode::Char('L') => {
            let r = player.seek_by(seek_step);
            report(app, r);
        }
        KeyCode::Char('H') => {
            let r = player.seek_by(-seek_step);
            report(app, r);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let r = player.set_volume(player.volume_percent() + volume_step);
            report(app, r);
        }
        KeyCode::Char('-') => {
            let r = player.set_volume(player.volume_percent() - volume_step);
            report(app, r);
        }
        KeyCode::Tab => app.toggle_view(),
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::audio::fake::FakeMedia;
    use crate::library::{PlaylistBuilder, TrackCatalog};
    use crossterm::event::KeyModifiers;

    fn press(c: KeyCode) -> KeyEvent {
        KeyEvent::new(c, KeyModifiers::NONE)
    }

    fn setup() -> (App, PlaybackController<FakeMedia>, config::Settings) {
        let catalog = TrackCatalog::builtin();
        let playlist = PlaylistBuilder::new()
            .set_name("Mix")
            .add_track(catalog.tracks()[4].clone())
            .add_track(catalog.tracks()[0].clone())
            .build();
        let mut player = PlaybackController::new(FakeMedia::default(), catalog.tracks().to_vec());
        player.load_track(0).unwrap();
        (App::new(catalog, playlist), player, config::Settings::default())
    }

    #[test]
    fn q_requests_quit() {
        let (mut app, mut player, settings) = setup();
        assert!(handle_key_event(press(KeyCode::Char('q')), &settings, &mut app, &mut player));
    }

    #[test]
    fn space_toggles_playback() {
        let (mut app, mut player, settings) = setup();
        handle_key_event(press(KeyCode::Char(' ')), &settings, &mut app, &mut player);
        assert!(player.is_playing());
        handle_key_event(press(KeyCode::Char(' ')), &settings, &mut app, &mut player);
        assert!(!player.is_playing());
    }

    #[test]
    fn next_key_advances_plays_and_moves_cursor() {
        let (mut app, mut player, settings) = setup();
        handle_key_event(press(KeyCode::Char('l')), &settings, &mut app, &mut player);
        assert_eq!(player.current_index(), 1);
        assert!(player.is_playing());
        assert_eq!(app.selected, 1);

        handle_key_event(press(KeyCode::Char('h')), &settings, &mut app, &mut player);
        handle_key_event(press(KeyCode::Char('h')), &settings, &mut app, &mut player);
        assert_eq!(player.current_index(), 4);
    }

    #[test]
    fn enter_in_playlist_view_switches_the_sequence() {
        let (mut app, mut player, settings) = setup();
        handle_key_event(press(KeyCode::Tab), &settings, &mut app, &mut player);
        handle_key_event(press(KeyCode::Down), &settings, &mut app, &mut player);
        handle_key_event(press(KeyCode::Enter), &settings, &mut app, &mut player);

        assert_eq!(app.playing_view, View::Playlist);
        assert_eq!(player.tracks().len(), 2);
        assert_eq!(player.current_index(), 1);
        assert_eq!(player.now_playing().name, "Dream speedrun");
        assert!(player.is_playing());
    }

    #[test]
    fn enter_plays_the_picked_row_when_the_first_row_cannot_load() {
        let (mut app, mut player, settings) = setup();
        player.media_mut().fail_load_for = Some(".wav".to_string());
        let loads = player.media().loads;

        handle_key_event(press(KeyCode::Tab), &settings, &mut app, &mut player);
        handle_key_event(press(KeyCode::Down), &settings, &mut app, &mut player);
        handle_key_event(press(KeyCode::Enter), &settings, &mut app, &mut player);

        assert_eq!(app.selected, 1);
        assert_eq!(player.current_index(), 1);
        assert_eq!(player.now_playing().name, "Dream speedrun");
        assert!(player.is_playing());
        assert!(app.status_message.is_none());
        assert_eq!(player.media().loads, loads + 1);
    }

    #[test]
    fn repeated_seek_keys_move_from_the_live_position() {
        let (mut app, mut player, settings) = setup();
        player.media_mut().duration = 200.0;

        handle_key_event(press(KeyCode::Char('L')), &settings, &mut app, &mut player);
        assert_eq!(player.media().position, 10.0);
        handle_key_event(press(KeyCode::Char('L')), &settings, &mut app, &mut player);
        assert_eq!(player.media().position, 20.0);
        handle_key_event(press(KeyCode::Char('H')), &settings, &mut app, &mut player);
        assert_eq!(player.media().position, 10.0);
        assert_eq!(player.time().seek, 5.0);
    }

    #[test]
    fn cursor_follows_an_automatic_advance() {
        let (mut app, mut player, _) = setup();
        player.select(0).unwrap();

        player.media_mut().ended = true;
        pump(&mut app, &mut player, Instant::now());
        assert_eq!(player.current_index(), 1);
        assert_eq!(app.selected, 1);

        app.set_selected(3);
        pump(&mut app, &mut player, Instant::now());
        assert_eq!(app.selected, 3);
    }

    #[test]
    fn seek_without_duration_shows_status_and_keeps_running() {
        let (mut app, mut player, settings) = setup();
        let quit = handle_key_event(press(KeyCode::Char('L')), &settings, &mut app, &mut player);
        assert!(!quit);
        assert!(app.status_message.is_some());

        handle_key_event(press(KeyCode::Char('p')), &settings, &mut app, &mut player);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn volume_keys_step_and_clamp() {
        let (mut app, mut player, settings) = setup();
        handle_key_event(press(KeyCode::Char('+')), &settings, &mut app, &mut player);
        assert_eq!(player.volume_percent(), 100.0);
        handle_key_event(press(KeyCode::Char('-')), &settings, &mut app, &mut player);
        assert_eq!(player.volume_percent(), 95.0);
    }
}
