use crate::config::PlaylistEntry;

use super::catalog::TrackCatalog;
use super::model::Track;

/// A named, ordered sequence of tracks. Insertion order is playback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub description: String,
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(name: String, description: String, tracks: Vec<Track>) -> Self {
        Self {
            name,
            description,
            tracks,
        }
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Lines emitted by [`Playlist::display`].
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Playlist Name: {}", self.name),
            format!("Description: {}", self.description),
            "Tracks:".to_string(),
        ];
        lines.extend(
            self.tracks
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{}. {} by {}", i + 1, t.name(), t.artist())),
        );
        lines
    }

    /// Diagnostic dump of the playlist to the log.
    pub fn display(&self) {
        for line in self.lines() {
            log::info!("{line}");
        }
    }

    /// Build a playlist from a config entry, resolving 0-based catalog indices.
    pub fn from_entry(entry: &PlaylistEntry, catalog: &TrackCatalog) -> Self {
        let mut builder = PlaylistBuilder::new()
            .set_name(entry.name.clone())
            .set_description(entry.description.clone());

        for &i in &entry.tracks {
            match catalog.get(i) {
                Some(track) => builder = builder.add_track(track.clone()),
                None => log::warn!(
                    "playlist {:?}: catalog index {} out of range ({} tracks), skipped",
                    entry.name,
                    i,
                    catalog.len()
                ),
            }
        }

        builder.build()
    }
}

/// Step-by-step construction of a [`Playlist`].
#[derive(Debug, Default)]
pub struct PlaylistBuilder {
    name: String,
    description: String,
    tracks: Vec<Track>,
}

impl PlaylistBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn add_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn build(self) -> Playlist {
        Playlist::new(self.name, self.description, self.tracks)
    }
}
