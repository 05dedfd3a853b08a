use crate::{animation::kind::AnimationKind, foundation::defaults};

/// Timing of one layer animation, all durations in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Motion law.
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Length of one cycle.
    pub duration: f64,
    /// Time before the first cycle starts; the layer is parked until then.
    #[serde(default)]
    pub delay: f64,
    /// Number of cycles; `0` repeats forever.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
    /// Pause between cycles, during which the layer holds its end state.
    #[serde(default)]
    pub gap: f64,
    /// Fade-in window for `fade-in-out`; unset means 10% of `duration`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in_duration: Option<f64>,
    /// Fade-out window for `fade-in-out`; unset means 20% of `duration`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out_duration: Option<f64>,
}

fn default_repeat() -> u32 {
    1
}

impl AnimationConfig {
    /// Defaults assigned when an operator picks `kind` for a slide lasting
    /// `slide_duration` seconds.
    ///
    /// Fade windows are filled in for every kind so the editor shows consistent values
    /// even though only `fade-in-out` reads them.
    pub fn for_slide(kind: AnimationKind, slide_duration: f64) -> Self {
        let duration = match kind {
            AnimationKind::FadeInOut => slide_duration,
            _ => slide_duration * defaults::ANIMATION_DURATION_RATIO,
        };
        let (repeat, gap) = if kind.is_motion() {
            (defaults::MOTION_REPEAT, defaults::MOTION_GAP)
        } else {
            (1, 0.0)
        };

        Self {
            kind,
            duration,
            delay: 0.0,
            repeat,
            gap,
            fade_in_duration: Some(defaults::fade_in_for(slide_duration)),
            fade_out_duration: Some(defaults::fade_out_for(slide_duration)),
        }
    }

    /// Time from the end of the delay until the terminal state, `None` when the
    /// animation repeats forever.
    pub fn total_duration(&self) -> Option<f64> {
        if self.repeat == 0 {
            return None;
        }
        let n = f64::from(self.repeat);
        Some(n * self.duration + (n - 1.0) * self.gap.max(0.0))
    }

    /// Fade-in and fade-out windows as fractions of one cycle.
    ///
    /// Each ratio is clamped to `[0, 1]`; when their sum exceeds 1 both are rescaled
    /// proportionally so the windows touch instead of overlapping.
    pub fn fade_ratios(&self) -> (f64, f64) {
        let duration = self.duration.max(defaults::MIN_FADE_BASE_DURATION);
        let fade_in = self
            .fade_in_duration
            .unwrap_or(duration * defaults::FADE_IN_RATIO)
            .max(0.0);
        let fade_out = self
            .fade_out_duration
            .unwrap_or(duration * defaults::FADE_OUT_RATIO)
            .max(0.0);

        let mut in_ratio = (fade_in / duration).min(1.0);
        let mut out_ratio = (fade_out / duration).min(1.0);
        let total = in_ratio + out_ratio;
        if total > 1.0 {
            tracing::debug!(in_ratio, out_ratio, "rescaling overlapping fade windows");
            in_ratio /= total;
            out_ratio /= total;
        }
        (in_ratio, out_ratio)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
