//! Small state types shared by the controller and the UI.

use std::time::Duration;

/// Period of the time-display refresh.
pub const UPDATE_PERIOD: Duration = Duration::from_secs(1);

/// Transport state of the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

/// Icon shown on the play/pause button: the action a press would take.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransportIcon {
    #[default]
    Play,
    Pause,
}

impl TransportIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }
}

/// Metadata of the loaded track as shown in the now-playing box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NowPlaying {
    pub art: String,
    pub name: String,
    pub artist: String,
    /// e.g. `PLAYING 2 OF 5`
    pub position: String,
}
