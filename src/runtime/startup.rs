use crate::app::App;
use crate::audio::{AudioPlayer, MediaElement, PlaybackController};
use crate::config::{PlaylistEntry, Settings};
use crate::library::{Playlist, TrackCatalog};

/// Pick the catalog source: explicit entries, then a scanned directory, then
/// the built-in list.
pub fn resolve_catalog(settings: &Settings) -> TrackCatalog {
    if !settings.catalog.is_empty() {
        log::info!("using {} configured catalog tracks", settings.catalog.len());
        return TrackCatalog::from_entries(&settings.catalog);
    }
    if let Some(dir) = &settings.library.dir {
        let catalog = TrackCatalog::scan(dir, &settings.library);
        if catalog.is_empty() {
            log::warn!("no playable files under {}", dir.display());
        }
        return catalog;
    }
    log::info!("no catalog configured, using the built-in one");
    TrackCatalog::builtin()
}

/// The custom playlist: the first configured one, else the default selection.
pub fn resolve_playlist(settings: &Settings, catalog: &TrackCatalog) -> Playlist {
    let entry = settings
        .playlists
        .first()
        .cloned()
        .unwrap_or_else(PlaylistEntry::default_custom);
    let playlist = Playlist::from_entry(&entry, catalog);
    if playlist.is_empty() {
        log::warn!("playlist '{}' has no playable tracks", playlist.name);
    } else {
        log::info!("playlist '{}' with {} tracks", playlist.name, playlist.len());
    }
    playlist
}

/// Apply the configured volume, hand the catalog to the player, load its
/// first track and optionally start it.
pub fn prepare_player<M: MediaElement>(
    player: &mut PlaybackController<M>,
    app: &mut App,
    settings: &Settings,
) {
    app.header_text = settings.ui.header_text.clone();

    if let Err(e) = player.set_volume(f64::from(settings.playback.volume_percent)) {
        log::warn!("could not apply initial volume: {e}");
    }

    if app.catalog.is_empty() {
        app.set_status("No tracks found");
        return;
    }

    let mut result = player.set_tracks(app.catalog.tracks().to_vec());
    if result.is_ok() && settings.playback.autoplay {
        result = player.play();
    }
    if let Err(e) = result {
        log::warn!("startup playback failed: {e}");
        app.set_status(e.to_string());
    }
}
