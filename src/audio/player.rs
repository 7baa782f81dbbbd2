use std::time::Instant;

use crate::display::{TimeDisplay, seek_percent, seek_position, volume_gain};
use crate::error::PlayerError;
use crate::library::Track;

use super::media::MediaElement;
use super::timer::{EndedHook, IntervalTimer};
use super::types::{NowPlaying, PlaybackState, TransportIcon, UPDATE_PERIOD};

/// Transport capabilities exposed to the shell.
pub trait AudioPlayer {
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self) -> Result<(), PlayerError>;
    /// Move to the following track, wrapping past the last one, and load it.
    fn next(&mut self) -> Result<(), PlayerError>;
    /// Move to the preceding track, wrapping before the first one, and load it.
    fn prev(&mut self) -> Result<(), PlayerError>;
}

/// Owns the active track sequence and drives a [`MediaElement`].
///
/// `current` is the single source of truth for which track is loaded and is
/// always a valid index while the sequence is non-empty.
pub struct PlaybackController<M: MediaElement> {
    media: M,
    tracks: Vec<Track>,
    current: usize,
    state: PlaybackState,
    icon: TransportIcon,
    timer: IntervalTimer,
    ended_hook: EndedHook,
    time: TimeDisplay,
    now_playing: NowPlaying,
    volume_percent: f64,
}

impl<M: MediaElement> PlaybackController<M> {
    /// Create a controller over `tracks`. Nothing is loaded until
    /// [`PlaybackController::load_track`] is called.
    pub fn new(media: M, tracks: Vec<Track>) -> Self {
        Self {
            media,
            tracks,
            current: 0,
            state: PlaybackState::Stopped,
            icon: TransportIcon::Play,
            timer: IntervalTimer::new(UPDATE_PERIOD),
            ended_hook: EndedHook::default(),
            time: TimeDisplay::default(),
            now_playing: NowPlaying::default(),
            volume_percent: 100.0,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn icon(&self) -> TransportIcon {
        self.icon
    }

    pub fn time(&self) -> &TimeDisplay {
        &self.time
    }

    pub fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    pub fn volume_percent(&self) -> f64 {
        self.volume_percent
    }

    #[cfg(test)]
    pub(crate) fn timer_active(&self) -> bool {
        self.timer.is_active()
    }

    #[cfg(test)]
    pub(crate) fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub(crate) fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    fn ensure_tracks(&self) -> Result<usize, PlayerError> {
        match self.tracks.len() {
            0 => Err(PlayerError::EmptyPlaylist),
            n => Ok(n),
        }
    }

    /// Load the track at `index` into the media element.
    ///
    /// Cancels the refresh timer, resets the time display, swaps the source,
    /// updates the now-playing metadata, then restarts the timer and re-arms
    /// the end-of-track hook. Output is left stopped.
    pub fn load_track(&mut self, index: usize) -> Result<(), PlayerError> {
        let len = self.ensure_tracks()?;
        if index >= len {
            return Err(PlayerError::IndexOutOfRange { index, len });
        }

        self.timer.cancel();
        self.time.reset();

        self.current = index;
        let track = &self.tracks[index];
        log::debug!(
            "source {} ({})",
            track.path(),
            track.extension().unwrap_or("no extension")
        );
        self.media.set_src(track.path());
        let loaded = self.media.load();
        self.state = PlaybackState::Stopped;
        self.icon = TransportIcon::Play;

        self.now_playing = NowPlaying {
            art: track.image().to_string(),
            name: track.name().to_string(),
            artist: track.artist().to_string(),
            position: format!("PLAYING {} OF {}", index + 1, len),
        };
        log::info!(
            "loaded track {}/{}: {} by {}",
            index + 1,
            len,
            track.name(),
            track.artist()
        );

        self.timer.start(Instant::now());
        self.ended_hook.arm();

        loaded.map_err(|e| {
            log::warn!("failed to load {}: {e}", track.path());
            PlayerError::from(e)
        })
    }

    /// Load the track at `index` and start it (playlist item selection).
    pub fn select(&mut self, index: usize) -> Result<(), PlayerError> {
        self.load_track(index)?;
        self.play()
    }

    /// Replace the active sequence without loading anything. Playback stops
    /// and the display is cleared until a track is loaded.
    pub fn replace_tracks(&mut self, tracks: Vec<Track>) {
        if self.timer.is_active() {
            log::debug!("sequence replaced, stopping refresh timer");
        }
        self.tracks = tracks;
        self.current = 0;
        self.timer.cancel();
        self.ended_hook.disarm();
        self.media.pause();
        self.state = PlaybackState::Stopped;
        self.icon = TransportIcon::Play;
        self.time.reset();
        self.now_playing = NowPlaying::default();
    }

    /// Replace the active sequence and load its first track, if any.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) -> Result<(), PlayerError> {
        self.replace_tracks(tracks);
        if self.tracks.is_empty() {
            return Ok(());
        }
        self.load_track(0)
    }

    pub fn play_pause(&mut self) -> Result<(), PlayerError> {
        if self.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    pub fn next_track(&mut self) -> Result<(), PlayerError> {
        self.next()?;
        self.play()
    }

    pub fn prev_track(&mut self) -> Result<(), PlayerError> {
        self.prev()?;
        self.play()
    }

    /// Jump to `percent` (0-100) of the current track.
    pub fn seek_to(&mut self, percent: f64) -> Result<(), PlayerError> {
        let percent = clamp_percent(percent)?;
        let duration = self.known_duration()?;
        let position = seek_position(duration, percent);
        log::debug!("seek to {percent}% ({position:.1}s of {duration:.1}s)");
        self.media.set_current_time(position)?;
        self.time.update(position, duration);
        Ok(())
    }

    /// Move `step` percentage points from the live playback position.
    pub fn seek_by(&mut self, step: f64) -> Result<(), PlayerError> {
        let duration = self.known_duration()?;
        let current = seek_percent(self.media.current_time(), duration);
        self.seek_to(current + step)
    }

    fn known_duration(&self) -> Result<f64, PlayerError> {
        let duration = self.media.duration();
        if !duration.is_finite() || duration <= 0.0 {
            return Err(PlayerError::DurationUnknown);
        }
        Ok(duration)
    }

    /// Set the output volume from a 0-100 value.
    pub fn set_volume(&mut self, percent: f64) -> Result<(), PlayerError> {
        let percent = clamp_percent(percent)?;
        self.media.set_volume(volume_gain(percent));
        self.volume_percent = percent;
        Ok(())
    }

    /// Drive periodic work: refresh the time display when the timer is due
    /// and advance to the next track once the current one has ended.
    pub fn tick(&mut self, now: Instant) -> Result<(), PlayerError> {
        if self.timer.poll(now) {
            let position = self.media.current_time();
            let duration = self.media.duration();
            if !self.time.update(position, duration) {
                log::trace!("duration not known yet, skipping time update");
            }
        }

        if self.ended_hook.is_armed() && self.media.ended() {
            self.ended_hook.disarm();
            if let Some(track) = self.current_track() {
                log::debug!("{} ended", track.display());
            }
            self.next()?;
            self.play()?;
        }
        Ok(())
    }
}

impl<M: MediaElement> AudioPlayer for PlaybackController<M> {
    fn play(&mut self) -> Result<(), PlayerError> {
        self.ensure_tracks()?;
        if let Err(e) = self.media.play() {
            log::warn!("media refused to start: {e}");
            self.state = PlaybackState::Stopped;
            self.icon = TransportIcon::Play;
            return Err(e.into());
        }
        self.state = PlaybackState::Playing;
        self.icon = TransportIcon::Pause;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.media.pause();
        self.state = PlaybackState::Stopped;
        self.icon = TransportIcon::Play;
        Ok(())
    }

    fn next(&mut self) -> Result<(), PlayerError> {
        let len = self.ensure_tracks()?;
        self.load_track((self.current + 1) % len)
    }

    fn prev(&mut self) -> Result<(), PlayerError> {
        let len = self.ensure_tracks()?;
        self.load_track((self.current + len - 1) % len)
    }
}

/// Reject non-finite values and clamp the rest into `0..=100`.
fn clamp_percent(percent: f64) -> Result<f64, PlayerError> {
    if !percent.is_finite() {
        return Err(PlayerError::InvalidPercent(percent));
    }
    let clamped = percent.clamp(0.0, 100.0);
    if clamped != percent {
        log::debug!("clamped {percent} to {clamped}");
    }
    Ok(clamped)
}
