//! Playback: the media element contract, its `rodio` implementation and
//! the controller that sequences tracks over it.

mod media;
mod player;
mod rodio_media;
mod timer;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use media::MediaElement;
pub use player::{AudioPlayer, PlaybackController};
pub use rodio_media::RodioMedia;
pub use timer::{EndedHook, IntervalTimer};
pub use types::*;
