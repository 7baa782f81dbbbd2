//! Application model types: `App` and `View`.
//!
//! The `App` struct holds the catalog, the custom playlist and the list
//! selection. Playback state lives in the controller, not here.

use crate::library::{Playlist, Track, TrackCatalog};

/// Which list the main pane shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Catalog,
    Playlist,
}

/// The main application model.
pub struct App {
    pub catalog: TrackCatalog,
    pub playlist: Playlist,
    pub view: View,
    /// The list whose tracks the controller is currently sequencing.
    pub playing_view: View,
    pub selected: usize,
    pub header_text: String,
    /// Last controller error, shown in the status line until the next action.
    pub status_message: Option<String>,
}

impl App {
    pub fn new(catalog: TrackCatalog, playlist: Playlist) -> Self {
        Self {
            catalog,
            playlist,
            view: View::Catalog,
            playing_view: View::Catalog,
            selected: 0,
            header_text: String::new(),
            status_message: None,
        }
    }

    /// Tracks of the current view, in playback order.
    pub fn visible_tracks(&self) -> &[Track] {
        match self.view {
            View::Catalog => self.catalog.tracks(),
            View::Playlist => &self.playlist.tracks,
        }
    }

    /// Return true if the current view has any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.visible_tracks().is_empty()
    }

    /// Switch between the catalog and the playlist view, resetting the selection.
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Catalog => View::Playlist,
            View::Playlist => View::Catalog,
        };
        self.selected = 0;
    }

    /// Move selection to the next track, wrapping to the first.
    pub fn next(&mut self) {
        let len = self.visible_tracks().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection to the previous track, wrapping to the last.
    pub fn prev(&mut self) {
        let len = self.visible_tracks().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Point the selection at `idx` when it exists in the current view.
    pub fn set_selected(&mut self, idx: usize) {
        if idx < self.visible_tracks().len() {
            self.selected = idx;
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
