use crate::foundation::{
    defaults,
    error::{MotionError, MotionResult},
};

/// Editor timeline clock for one slide.
///
/// The engine never owns a timer; this is the caller-side clock the editor preview
/// advances every [`defaults::TICK_INTERVAL_MS`] and scrubs directly. Positions are
/// always within `[0, duration]`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineClock {
    duration: f64,
    position: f64,
    playing: bool,
}

impl TimelineClock {
    /// Seconds advanced by one tick.
    pub const TICK_SECS: f64 = defaults::TICK_INTERVAL_MS as f64 / 1000.0;

    /// Stopped clock at position 0 for a slide of `duration` seconds.
    pub fn new(duration: f64) -> MotionResult<Self> {
        check_duration(duration)?;
        Ok(Self {
            duration,
            position: 0.0,
            playing: false,
        })
    }

    /// Total timeline length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Current position in seconds.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Whether [`TimelineClock::tick`] advances the position.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start advancing on ticks.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop advancing on ticks; the position is kept.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Advance one tick while playing and return the new position.
    ///
    /// Reaching the end clamps to `duration` and pauses.
    pub fn tick(&mut self) -> f64 {
        if !self.playing {
            return self.position;
        }
        let next = self.position + Self::TICK_SECS;
        if next >= self.duration {
            self.position = self.duration;
            self.playing = false;
            tracing::trace!(duration = self.duration, "timeline reached the end");
        } else {
            self.position = next;
        }
        self.position
    }

    /// Jump to `position`, clamped to the timeline.
    pub fn seek(&mut self, position: f64) -> f64 {
        self.position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, self.duration)
        };
        self.position
    }

    /// Change the timeline length, pulling the position back inside it.
    pub fn set_duration(&mut self, duration: f64) -> MotionResult<()> {
        check_duration(duration)?;
        self.duration = duration;
        self.position = self.position.min(duration);
        Ok(())
    }

    /// Every position a playing clock passes through from 0, ending exactly at
    /// `duration`.
    pub fn sample_times(&self) -> impl Iterator<Item = f64> + use<> {
        let mut clock = Self {
            duration: self.duration,
            position: 0.0,
            playing: true,
        };
        let mut first = true;
        std::iter::from_fn(move || {
            if first {
                first = false;
                return Some(0.0);
            }
            if !clock.playing {
                return None;
            }
            Some(clock.tick())
        })
    }
}

fn check_duration(duration: f64) -> MotionResult<()> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(MotionError::validation(
            "timeline duration must be finite and > 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
