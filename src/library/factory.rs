//! Track construction, dispatched on the media file type.
//!
//! Every construction path currently yields the same record. The per-format
//! constructors exist so format-specific handling (decode hints, tag parsing)
//! has a place to land.

use super::model::{Track, extension_of};

/// Media file type as inferred from the path extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileType {
    Mp3,
    Wav,
    Other,
}

impl FileType {
    /// Classify `path` by the text after its last `.` (case-sensitive).
    pub fn from_path(path: &str) -> Self {
        match extension_of(path) {
            Some("mp3") => Self::Mp3,
            Some("wav") => Self::Wav,
            _ => Self::Other,
        }
    }
}

pub struct TrackFactory;

impl TrackFactory {
    /// Build a track without any validation.
    pub fn create_track(
        name: impl Into<String>,
        artist: impl Into<String>,
        image: impl Into<String>,
        path: impl Into<String>,
    ) -> Track {
        Track::new(name.into(), artist.into(), image.into(), path.into())
    }

    /// Build a track through the constructor matching the file type of `path`.
    ///
    /// Unknown or missing extensions fall back to [`TrackFactory::create_track`].
    pub fn create_track_by_file_type(
        name: impl Into<String>,
        artist: impl Into<String>,
        image: impl Into<String>,
        path: impl Into<String>,
    ) -> Track {
        let path = path.into();
        match FileType::from_path(&path) {
            FileType::Mp3 => Self::create_mp3_track(name, artist, image, path),
            FileType::Wav => Self::create_wav_track(name, artist, image, path),
            FileType::Other => Self::create_track(name, artist, image, path),
        }
    }

    fn create_mp3_track(
        name: impl Into<String>,
        artist: impl Into<String>,
        image: impl Into<String>,
        path: String,
    ) -> Track {
        Self::create_track(name, artist, image, path)
    }

    fn create_wav_track(
        name: impl Into<String>,
        artist: impl Into<String>,
        image: impl Into<String>,
        path: String,
    ) -> Track {
        Self::create_track(name, artist, image, path)
    }
}
