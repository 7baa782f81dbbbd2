use crate::error::MediaError;

/// The audio output collaborator commanded by the playback controller.
///
/// Times are in seconds. `duration` is NaN until the source's length is
/// known. Decoding and output are entirely the implementor's business.
pub trait MediaElement {
    /// Assign the media reference to play; takes effect on the next `load`.
    fn set_src(&mut self, src: &str);
    /// Drop the previous source and prepare the current one, paused at 0.
    fn load(&mut self) -> Result<(), MediaError>;
    /// Start or resume output.
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, secs: f64) -> Result<(), MediaError>;
    fn duration(&self) -> f64;
    /// Output gain in `0.0..=1.0`.
    fn set_volume(&mut self, gain: f64);
    /// Whether the loaded source played through to its end.
    fn ended(&self) -> bool;
}
