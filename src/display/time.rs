/// Format seconds as `MM:SS`, zero-padding components below 10.
///
/// Minutes are not wrapped into hours, so long tracks render as e.g. `125:03`.
pub fn format_clock(secs: f64) -> String {
    let minutes = (secs / 60.0).floor();
    let seconds = (secs - minutes * 60.0).floor();
    format!("{:02}:{:02}", minutes as u64, seconds as u64)
}

/// Playback position as 0-100 of `duration`.
pub fn seek_percent(position: f64, duration: f64) -> f64 {
    position * 100.0 / duration
}

/// Absolute position for a 0-100 seek bar value.
pub fn seek_position(duration: f64, percent: f64) -> f64 {
    duration * percent / 100.0
}

/// Output gain (0.0-1.0) for a 0-100 volume bar value.
pub fn volume_gain(percent: f64) -> f64 {
    percent / 100.0
}

/// The strings and seek value shown in the transport bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDisplay {
    pub current: String,
    pub total: String,
    pub seek: f64,
}

impl Default for TimeDisplay {
    fn default() -> Self {
        Self {
            current: format_clock(0.0),
            total: format_clock(0.0),
            seek: 0.0,
        }
    }
}

impl TimeDisplay {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Refresh from the media position and duration.
    ///
    /// Returns `false` and leaves the display untouched while `duration` is
    /// not a usable number (metadata not loaded yet).
    pub fn update(&mut self, position: f64, duration: f64) -> bool {
        if !duration.is_finite() || duration <= 0.0 {
            return false;
        }
        self.seek = seek_percent(position, duration);
        self.current = format_clock(position);
        self.total = format_clock(duration);
        true
    }
}
