use crate::{
    foundation::error::{MotionError, MotionResult},
    slide::model::Slide,
};

/// Slide-local position inside a playlist.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPosition {
    /// Index of the slide playing.
    pub index: usize,
    /// Seconds since that slide started.
    pub local_time: f64,
}

/// Ordered slides laid end to end on one timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaylistTimeline {
    starts: Vec<f64>,
    total: f64,
}

impl PlaylistTimeline {
    /// Build a timeline from slide durations in play order.
    pub fn new(durations: impl IntoIterator<Item = f64>) -> MotionResult<Self> {
        let mut starts = Vec::new();
        let mut total = 0.0;
        for (idx, d) in durations.into_iter().enumerate() {
            if !d.is_finite() || d <= 0.0 {
                return Err(MotionError::validation(format!(
                    "playlist slide {idx} duration must be finite and > 0"
                )));
            }
            starts.push(total);
            total += d;
        }
        Ok(Self { starts, total })
    }

    /// Timeline of `slides` in order.
    pub fn from_slides(slides: &[Slide]) -> MotionResult<Self> {
        Self::new(slides.iter().map(|s| s.duration))
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// `true` when the playlist has no slides.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Sum of all slide durations.
    pub fn total_duration(&self) -> f64 {
        self.total
    }

    /// Start time of slide `index`.
    pub fn start_of(&self, index: usize) -> Option<f64> {
        self.starts.get(index).copied()
    }

    /// Slide playing at `time`; `None` before 0, at or past the end, or when empty.
    pub fn locate(&self, time: f64) -> Option<PlaylistPosition> {
        if !(time >= 0.0 && time < self.total) {
            return None;
        }
        // last start <= time
        let index = self.starts.partition_point(|s| *s <= time).saturating_sub(1);
        Some(PlaylistPosition {
            index,
            local_time: time - self.starts[index],
        })
    }

    /// Like [`PlaylistTimeline::locate`], but the playlist repeats forever as it does on
    /// a display device.
    pub fn locate_looped(&self, time: f64) -> Option<PlaylistPosition> {
        if self.is_empty() || !time.is_finite() {
            return None;
        }
        let wrapped = time.rem_euclid(self.total);
        // rem_euclid rounds tiny negative inputs up to exactly `total`
        self.locate(if wrapped >= self.total { 0.0 } else { wrapped })
    }
}

/// Format seconds as `m:ss`; non-finite or negative input prints `0:00`.
pub fn format_duration_seconds(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
#[path = "../../tests/unit/playback/playlist.rs"]
mod tests;
