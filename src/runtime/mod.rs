use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{PlaybackController, RodioMedia};

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut print_config = false;
    let mut dir: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        if arg == "--print-config" {
            print_config = true;
        } else if !arg.starts_with('-') && dir.is_none() {
            dir = Some(PathBuf::from(arg));
        }
    }

    let (mut settings, settings_warning) = settings::load_settings();

    if print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    // A directory on the command line replaces any configured track list.
    if let Some(dir) = dir {
        settings.catalog.clear();
        settings.library.dir = Some(dir);
    }

    match logging::init(&settings.logging) {
        Ok(path) => log::info!("logging to {}", path.display()),
        Err(e) => eprintln!("rondo: logging disabled: {e}"),
    }
    if let Some(msg) = settings_warning {
        log::warn!("{msg}");
    }

    let catalog = startup::resolve_catalog(&settings);
    let playlist = startup::resolve_playlist(&settings, &catalog);
    playlist.display();

    let media = RodioMedia::open_default()?;
    let mut player = PlaybackController::new(media, Vec::new());
    let mut app = App::new(catalog, playlist);
    startup::prepare_player(&mut player, &mut app, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("shutting down");
    run_result
}
