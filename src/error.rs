//! Error types shared by the media backends and the playback controller.

use thiserror::Error;

/// Failures reported by a `MediaElement` implementation.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("audio output unavailable: {0}")]
    Output(String),
    #[error("seek failed: {0}")]
    Seek(String),
    #[error("no media source assigned")]
    NoSource,
}

/// Failures reported by the playback controller.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("playlist is empty")]
    EmptyPlaylist,
    #[error("track index {index} out of range (playlist has {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("track duration is not known yet")]
    DurationUnknown,
    #[error("invalid percentage: {0}")]
    InvalidPercent(f64),
    #[error(transparent)]
    Media(#[from] MediaError),
}
