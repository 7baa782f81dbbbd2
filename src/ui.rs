//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player with `ratatui`: now-playing box, seek and
//! volume bars, the current list and the controls footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, View};
use crate::audio::{MediaElement, PlaybackController};
use crate::config::ControlsSettings;

/// Render the controls help text, incorporating the configured step sizes.
fn controls_text(controls: &ControlsSettings) -> String {
    [
        "[j/k] up/down".to_string(),
        "[enter] play selected".to_string(),
        "[space/p] play/pause".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] seek -/+{}%", controls.seek_step_percent),
        format!("[-/+] volume -/+{}%", controls.volume_step_percent),
        "[tab] catalog/playlist".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

fn list_title(app: &App) -> String {
    match app.view {
        View::Catalog => " tracks ".to_string(),
        View::Playlist if app.playlist.description.is_empty() => {
            format!(" {} ", app.playlist.name)
        }
        View::Playlist => format!(" {} - {} ", app.playlist.name, app.playlist.description),
    }
}

/// Ratio for a gauge, clamped because `Gauge` rejects values outside `0..=1`.
fn gauge_ratio(percent: f64) -> f64 {
    if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<M: MediaElement>(
    frame: &mut Frame,
    app: &App,
    player: &PlaybackController<M>,
    controls: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(app.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" rondo ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let now = player.now_playing();
    let now_playing = if now.name.is_empty() {
        vec![Line::from("Nothing loaded")]
    } else {
        let art = if now.art.is_empty() { "-" } else { now.art.as_str() };
        vec![
            Line::from(format!("{}  {}", player.icon().glyph(), now.position)),
            Line::from(format!("{} by {}", now.name, now.artist)),
            Line::from(format!("art: {art}")),
        ]
    };
    let now_playing = Paragraph::new(now_playing)
        .block(
            Block::bordered()
                .padding(Padding::left(1))
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, chunks[1]);

    let time = player.time();
    let seek = Gauge::default()
        .block(Block::bordered().title(" seek "))
        .gauge_style(Style::default().add_modifier(Modifier::BOLD))
        .ratio(gauge_ratio(time.seek))
        .label(format!("{} / {}", time.current, time.total));
    frame.render_widget(seek, chunks[2]);

    let volume = player.volume_percent();
    let volume_bar = Gauge::default()
        .block(Block::bordered().title(" volume "))
        .ratio(gauge_ratio(volume))
        .label(format!("{volume:.0}%"));
    frame.render_widget(volume_bar, chunks[3]);

    let playing_here = app.view == app.playing_view;
    let items: Vec<ListItem> = app
        .visible_tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let marker = if playing_here && i == player.current_index() {
                "♪ "
            } else {
                "  "
            };
            ListItem::new(format!("{marker}{}", t.display()))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title(app)))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if app.has_tracks() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, chunks[4], &mut state);

    let mut footer_text = controls_text(controls);
    if let Some(msg) = &app.status_message {
        footer_text = format!("{msg}\n{footer_text}");
    }
    let footer = Paragraph::new(footer_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}
