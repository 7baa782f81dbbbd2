//! Track records, the catalog they come from, and user playlists.
//!
//! Tracks are built through `TrackFactory`, collected into a
//! `TrackCatalog` (built-in, configured or scanned from disk) and grouped
//! into named `Playlist`s with `PlaylistBuilder`.

mod catalog;
mod factory;
mod model;
mod playlist;
mod scan;

pub use catalog::TrackCatalog;
pub use factory::{FileType, TrackFactory};
pub use model::Track;
pub use playlist::{Playlist, PlaylistBuilder};
