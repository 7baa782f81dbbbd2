//! `MediaElement` backed by a `rodio` output stream.
//!
//! Each `load` opens and decodes the current source into a fresh paused
//! `Sink`; the previous sink is stopped and dropped.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::error::MediaError;

use super::media::MediaElement;

pub struct RodioMedia {
    // Declared before `stream` so the sink is dropped first.
    sink: Option<Sink>,
    stream: OutputStream,
    src: Option<PathBuf>,
    duration: Option<Duration>,
    volume: f32,
}

impl RodioMedia {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, MediaError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| MediaError::Output(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            sink: None,
            stream,
            src: None,
            duration: None,
            volume: 1.0,
        })
    }

    fn create_sink(&self, path: &Path) -> Result<(Sink, Option<Duration>), MediaError> {
        let file = File::open(path).map_err(|source| MediaError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let source = Decoder::new(BufReader::new(file)).map_err(|e| MediaError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let duration = source.total_duration().or_else(|| probe_duration(path));

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.set_volume(self.volume);
        sink.append(source);
        Ok((sink, duration))
    }
}

/// Container-level duration for formats the decoder cannot size up front.
fn probe_duration(path: &Path) -> Option<Duration> {
    let tagged = lofty::read_from_path(path).ok()?;
    let d = tagged.properties().duration();
    (!d.is_zero()).then_some(d)
}

impl MediaElement for RodioMedia {
    fn set_src(&mut self, src: &str) {
        self.src = Some(PathBuf::from(src));
    }

    fn load(&mut self) -> Result<(), MediaError> {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.duration = None;

        let path = self.src.clone().ok_or(MediaError::NoSource)?;
        let (sink, duration) = self.create_sink(&path)?;
        log::debug!(
            "loaded {} (duration {:?})",
            path.display(),
            duration.map(|d| d.as_secs_f64())
        );
        self.sink = Some(sink);
        self.duration = duration;
        Ok(())
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let sink = self.sink.as_ref().ok_or(MediaError::NoSource)?;
        sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
    }

    fn current_time(&self) -> f64 {
        self.sink
            .as_ref()
            .map_or(0.0, |s| s.get_pos().as_secs_f64())
    }

    fn set_current_time(&mut self, secs: f64) -> Result<(), MediaError> {
        let sink = self.sink.as_ref().ok_or(MediaError::NoSource)?;
        sink.try_seek(Duration::from_secs_f64(secs.max(0.0)))
            .map_err(|e| MediaError::Seek(e.to_string()))
    }

    fn duration(&self) -> f64 {
        self.duration.map_or(f64::NAN, |d| d.as_secs_f64())
    }

    fn set_volume(&mut self, gain: f64) {
        self.volume = gain.clamp(0.0, 1.0) as f32;
        if let Some(sink) = self.sink.as_ref() {
            sink.set_volume(self.volume);
        }
    }

    fn ended(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|s| !s.is_paused() && s.empty())
    }
}
