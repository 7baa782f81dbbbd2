/// One playable item: metadata plus opaque artwork and media references.
///
/// Tracks are immutable once built; identity is the position in the owning
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    name: String,
    artist: String,
    image: String,
    path: String,
}

impl Track {
    pub(crate) fn new(name: String, artist: String, image: String, path: String) -> Self {
        Self {
            name,
            artist,
            image,
            path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Text after the last `.` of the media path, if any.
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.path)
    }

    /// `"artist - name"`, used for list rows and ordering.
    pub fn display(&self) -> String {
        if self.artist.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.artist.trim(), self.name)
        }
    }
}

pub(crate) fn extension_of(path: &str) -> Option<&str> {
    path.rsplit_once('.').map(|(_, ext)| ext)
}
