//! Turning a layer's authored animation fields into the config the calculator runs.
//!
//! Media and text layers store the same set of fields under different prefixes; both
//! composers go through [`resolve_effective_config`] so the two layers can never drift.

use crate::{
    animation::{config::AnimationConfig, kind::AnimationKind},
    foundation::defaults,
    foundation::error::{MotionError, MotionResult},
    slide::model::Layer,
};

/// Authored animation fields of one layer, each possibly unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerAnimationFields {
    /// Animation kind; unset means `none`.
    pub kind: Option<AnimationKind>,
    /// Cycle length in seconds.
    pub duration: Option<f64>,
    /// Delay before the first cycle in seconds.
    pub delay: Option<f64>,
    /// Repeat count as stored; fractional values are floored.
    pub repeat: Option<f64>,
    /// Gap between cycles in seconds.
    pub gap: Option<f64>,
    /// Fade-in window in seconds.
    pub fade_in_duration: Option<f64>,
    /// Fade-out window in seconds.
    pub fade_out_duration: Option<f64>,
}

impl LayerAnimationFields {
    /// Fields that reproduce `config` exactly.
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            kind: Some(config.kind),
            duration: Some(config.duration),
            delay: Some(config.delay),
            repeat: Some(f64::from(config.repeat)),
            gap: Some(config.gap),
            fade_in_duration: config.fade_in_duration,
            fade_out_duration: config.fade_out_duration,
        }
    }

    pub(crate) fn validate(&self, layer: Layer) -> MotionResult<()> {
        for (name, value) in [
            ("duration", self.duration),
            ("delay", self.delay),
            ("repeat", self.repeat),
            ("gap", self.gap),
            ("fadeInDuration", self.fade_in_duration),
            ("fadeOutDuration", self.fade_out_duration),
        ] {
            if let Some(v) = value
                && (!v.is_finite() || v < 0.0)
            {
                return Err(MotionError::validation(format!(
                    "{layer:?} animation {name} must be finite and >= 0 when set"
                )));
            }
        }
        Ok(())
    }
}

/// Normalize a stored repeat count: floored, negatives and NaN become `0` (infinite).
fn repeat_count(raw: f64) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    // saturating float->int cast
    raw.floor() as u32
}

/// Resolve the config a layer actually plays on a slide of `slide_duration` seconds.
///
/// Unset fields fall back to the default builder's values. On top of that:
/// - `fade-in-out` spans the whole slide once, with both fade windows clamped to fit;
/// - other kinds with a positive stored repeat have their cycle length fitted so every
///   repeat (and the gaps between them) plays within the slide. A fractional repeat
///   divides the slide as stored, while the config plays its floored count.
pub fn resolve_effective_config(
    fields: &LayerAnimationFields,
    slide_duration: f64,
) -> AnimationConfig {
    let kind = fields.kind.unwrap_or_default();
    let delay = fields.delay.unwrap_or(0.0);
    let raw_repeat = fields.repeat.unwrap_or(1.0);
    let repeat = repeat_count(raw_repeat);
    let gap = fields.gap.unwrap_or(0.0);
    let authored_duration = fields
        .duration
        .filter(|d| *d != 0.0 && !d.is_nan())
        .unwrap_or(slide_duration * defaults::ANIMATION_DURATION_RATIO);
    let fade_in = fields
        .fade_in_duration
        .unwrap_or_else(|| defaults::fade_in_for(slide_duration));
    let fade_out = fields
        .fade_out_duration
        .unwrap_or_else(|| defaults::fade_out_for(slide_duration));

    match kind {
        AnimationKind::None => AnimationConfig {
            kind,
            duration: authored_duration,
            delay,
            repeat,
            gap,
            fade_in_duration: Some(fade_in),
            fade_out_duration: Some(fade_out),
        },
        AnimationKind::FadeInOut => {
            let duration = slide_duration;
            let clamped_in = fade_in.min((duration - fade_out).max(0.0));
            let clamped_out = fade_out.min((duration - clamped_in).max(0.0));
            if clamped_in != fade_in || clamped_out != fade_out {
                tracing::debug!(
                    fade_in,
                    fade_out,
                    clamped_in,
                    clamped_out,
                    "clamped fade windows to slide duration"
                );
            }
            AnimationConfig {
                kind,
                duration,
                delay,
                repeat: 1,
                gap: 0.0,
                fade_in_duration: Some(clamped_in),
                fade_out_duration: Some(clamped_out),
            }
        }
        AnimationKind::SlideLeft
        | AnimationKind::SlideRight
        | AnimationKind::SlideUp
        | AnimationKind::SlideDown
        | AnimationKind::ZoomIn
        | AnimationKind::ZoomOut
        | AnimationKind::SlideHorizontal
        | AnimationKind::SlideVertical => {
            // fitting uses the stored repeat as-is; only the cycle count is floored
            let duration = if raw_repeat > 0.0 {
                let n = raw_repeat;
                let total_gap = gap.max(0.0) * (n - 1.0).max(0.0);
                let available = (slide_duration - total_gap).max(defaults::MIN_FITTED_DURATION);
                let fitted = (available / n).max(defaults::MIN_FITTED_DURATION);
                tracing::debug!(%kind, repeat = raw_repeat, fitted, "fitted sweep cycle into slide");
                fitted
            } else {
                authored_duration
            };
            AnimationConfig {
                kind,
                duration,
                delay,
                repeat,
                gap,
                fade_in_duration: Some(fade_in),
                fade_out_duration: Some(fade_out),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/effective.rs"]
mod tests;
