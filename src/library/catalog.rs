use crate::config::TrackEntry;

use super::factory::TrackFactory;
use super::model::Track;

/// The ordered list of tracks the player starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
}

impl TrackCatalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The catalog shipped with the player.
    pub fn builtin() -> Self {
        let tracks = vec![
            TrackFactory::create_track_by_file_type(
                "Dream speedrun",
                "Dream",
                "images/images.jpg",
                "musics/dream-speedrun.mp3",
            ),
            TrackFactory::create_track_by_file_type(
                "Let me do it 4 u",
                "weird dog",
                "images/let-me-do-it.jpg",
                "musics/let-me-do-it-for-you.mp3",
            ),
            TrackFactory::create_track_by_file_type(
                "Better Call Saul",
                "Saul Goodman",
                "images/better-call-saul.png",
                "musics/better-call-saul.mp3",
            ),
            TrackFactory::create_track_by_file_type(
                "THE BOYS",
                "Imagine Lizards",
                "images/the-boys.jpg",
                "musics/the-boys.mp3",
            ),
            TrackFactory::create_track_by_file_type(
                "bing chilling",
                "John Cena",
                "images/bingchilling.jpg",
                "musics/bing-chilling.wav",
            ),
        ];
        Self { tracks }
    }

    pub fn from_entries(entries: &[TrackEntry]) -> Self {
        let tracks = entries
            .iter()
            .map(|e| {
                TrackFactory::create_track_by_file_type(
                    e.name.as_str(),
                    e.artist.as_str(),
                    e.image.as_str(),
                    e.path.as_str(),
                )
            })
            .collect();
        Self { tracks }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
