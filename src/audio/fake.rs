//! Scriptable in-memory `MediaElement` for controller tests.

use crate::error::MediaError;

use super::media::MediaElement;

#[derive(Debug)]
pub struct FakeMedia {
    pub src: Option<String>,
    pub loads: usize,
    pub plays: usize,
    pub pauses: usize,
    pub playing: bool,
    pub position: f64,
    pub duration: f64,
    pub volume: f64,
    pub ended: bool,
    pub fail_load: bool,
    pub fail_play: bool,
    /// Fail `load` only for sources ending with this suffix.
    pub fail_load_for: Option<String>,
}

impl Default for FakeMedia {
    fn default() -> Self {
        Self {
            src: None,
            loads: 0,
            plays: 0,
            pauses: 0,
            playing: false,
            position: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            ended: false,
            fail_load: false,
            fail_play: false,
            fail_load_for: None,
        }
    }
}

impl MediaElement for FakeMedia {
    fn set_src(&mut self, src: &str) {
        self.src = Some(src.to_string());
    }

    fn load(&mut self) -> Result<(), MediaError> {
        self.loads += 1;
        self.playing = false;
        self.position = 0.0;
        self.ended = false;
        let picky = match (&self.fail_load_for, &self.src) {
            (Some(suffix), Some(src)) => src.ends_with(suffix.as_str()),
            _ => false,
        };
        if self.fail_load || picky {
            return Err(MediaError::Decode {
                path: self.src.clone().unwrap_or_default(),
                reason: "scripted failure".to_string(),
            });
        }
        Ok(())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.src.is_none() {
            return Err(MediaError::NoSource);
        }
        if self.fail_play {
            return Err(MediaError::Output("playback blocked".to_string()));
        }
        self.plays += 1;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pauses += 1;
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) -> Result<(), MediaError> {
        self.position = secs;
        Ok(())
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_volume(&mut self, gain: f64) {
        self.volume = gain;
    }

    fn ended(&self) -> bool {
        self.ended
    }
}
