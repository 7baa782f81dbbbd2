use std::path::Path;

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::catalog::TrackCatalog;
use super::factory::{FileType, TrackFactory};
use super::model::Track;

const UNKNOWN_ARTIST: &str = "Unknown Artist";
const COVER_NAMES: [&str; 4] = ["cover.jpg", "cover.png", "folder.jpg", "folder.png"];

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// First cover image next to `path`, or an empty reference.
fn find_artwork(path: &Path) -> String {
    let Some(dir) = path.parent() else {
        return String::new();
    };
    COVER_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

fn read_track(path: &Path) -> Track {
    let mut name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist = UNKNOWN_ARTIST.to_string();

    if let Ok(tagged) = lofty::read_from_path(path) {
        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.title() {
                if !v.trim().is_empty() {
                    name = v.trim().to_string();
                }
            }
            if let Some(v) = tag.artist() {
                if !v.trim().is_empty() {
                    artist = v.trim().to_string();
                }
            }
        }
    }

    let path_ref = path.display().to_string();
    log::debug!("scanned {path_ref} as {:?}", FileType::from_path(&path_ref));
    TrackFactory::create_track_by_file_type(name, artist, find_artwork(path), path_ref)
}

impl TrackCatalog {
    /// Build a catalog from the audio files found under `dir`.
    pub fn scan(dir: &Path, settings: &LibrarySettings) -> Self {
        let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

        let depth_cap = if settings.recursive {
            settings.max_depth
        } else {
            Some(1)
        };
        if let Some(d) = depth_cap {
            walker = walker.max_depth(d);
        }

        let mut tracks: Vec<Track> = walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file() && is_audio_file(e.path(), settings))
            .map(|e| read_track(e.path()))
            .collect();

        tracks.sort_by_key(|t| t.display().to_lowercase());
        log::info!("scanned {} tracks under {}", tracks.len(), dir.display());
        Self::new(tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn scan_keeps_audio_files_sorted_with_untagged_fallbacks() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.mp3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A.wav"), b"not a real wav").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();

        let catalog = TrackCatalog::scan(dir.path(), &LibrarySettings::default());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tracks()[0].name(), "A");
        assert_eq!(catalog.tracks()[0].artist(), UNKNOWN_ARTIST);
        assert_eq!(catalog.tracks()[0].extension(), Some("wav"));
        assert_eq!(catalog.tracks()[1].name(), "b");
        assert_eq!(catalog.tracks()[0].image(), "");
    }

    #[test]
    fn scan_picks_sibling_cover_art() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("song.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("cover.png"), b"png").unwrap();

        let catalog = TrackCatalog::scan(dir.path(), &LibrarySettings::default());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.tracks()[0].image().ends_with("cover.png"));
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            recursive: false,
            ..LibrarySettings::default()
        };
        let catalog = TrackCatalog::scan(dir.path(), &settings);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tracks()[0].name(), "root");
    }
}
