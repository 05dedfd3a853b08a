//! The animation-state calculator.
//!
//! Everything here is a pure function of `(config, time)`: no state survives between
//! calls, so scrubbing, re-rendering and out-of-order frame callbacks all agree.

use crate::animation::{config::AnimationConfig, kind::AnimationKind, state::AnimationState};

/// Sweep travel, in percent of the element, from the center to either off-screen end.
const SWEEP_EXTENT_PCT: f64 = 120.0;
/// Full sweep travel, off-screen to off-screen.
const SWEEP_TRAVEL_PCT: f64 = 240.0;
const ZOOM_MIN: f64 = 0.3;
const ZOOM_MAX: f64 = 3.0;
// literal on purpose: ZOOM_MAX - ZOOM_MIN differs from 2.7 in the last bit
const ZOOM_RANGE: f64 = 2.7;

/// Where an animation stands at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum AnimationPhase {
    /// Before `delay`: the layer waits in its kind-specific start pose.
    Parked,
    /// Inside a cycle (or the gap after it, where progress holds at 1).
    Running {
        /// Normalized cycle position in `[0, 1]`.
        progress: f64,
    },
    /// All finite repeats have played; the layer holds its end pose.
    Finished,
}

impl AnimationPhase {
    /// Normalized progress: 0 while parked, 1 once finished.
    pub fn progress(self) -> f64 {
        match self {
            Self::Parked => 0.0,
            Self::Running { progress } => progress,
            Self::Finished => 1.0,
        }
    }
}

/// Classify `time` (seconds on the slide timeline) against `config`.
pub fn phase_at(config: &AnimationConfig, time: f64) -> AnimationPhase {
    if time < config.delay {
        return AnimationPhase::Parked;
    }

    let elapsed = time - config.delay;
    if let Some(total) = config.total_duration()
        && elapsed >= total
    {
        return AnimationPhase::Finished;
    }

    let duration = config.duration;
    let cycle = duration + config.gap.max(0.0);
    let cycle_time = if cycle > 0.0 { elapsed % cycle } else { elapsed };
    if cycle_time > duration {
        // inside the gap after a cycle
        return AnimationPhase::Running { progress: 1.0 };
    }

    let progress = if duration > 0.0 {
        (cycle_time / duration).min(1.0)
    } else {
        1.0
    };
    AnimationPhase::Running { progress }
}

/// Normalized progress of `config` at `time`; see [`AnimationPhase::progress`].
pub fn progress_at(config: &AnimationConfig, time: f64) -> f64 {
    phase_at(config, time).progress()
}

/// Visual state of a layer animated by `config` at `time` seconds.
pub fn calculate_state(config: &AnimationConfig, time: f64) -> AnimationState {
    match phase_at(config, time) {
        AnimationPhase::Parked => parked_state(config.kind),
        AnimationPhase::Running { progress } => state_at_progress(config, progress),
        AnimationPhase::Finished => state_at_progress(config, 1.0),
    }
}

/// Pose held before the delay elapses: the progress-0 pose of the kind.
pub fn parked_state(kind: AnimationKind) -> AnimationState {
    match kind {
        AnimationKind::None => AnimationState::IDENTITY,
        AnimationKind::FadeInOut => AnimationState::with_opacity(0.0),
        AnimationKind::SlideLeft => AnimationState::with_translate(SWEEP_EXTENT_PCT, 0.0),
        AnimationKind::SlideRight => AnimationState::with_translate(-SWEEP_EXTENT_PCT, 0.0),
        AnimationKind::SlideUp => AnimationState::with_translate(0.0, SWEEP_EXTENT_PCT),
        AnimationKind::SlideDown => AnimationState::with_translate(0.0, -SWEEP_EXTENT_PCT),
        AnimationKind::ZoomIn => AnimationState::with_scale(ZOOM_MIN),
        AnimationKind::ZoomOut => AnimationState::with_scale(ZOOM_MAX),
        AnimationKind::SlideHorizontal | AnimationKind::SlideVertical => {
            parked_state(kind.canonical())
        }
    }
}

/// Map a cycle progress in `[0, 1]` to the kind's visual state.
pub fn state_at_progress(config: &AnimationConfig, progress: f64) -> AnimationState {
    match config.kind {
        AnimationKind::None => AnimationState::IDENTITY,
        AnimationKind::FadeInOut => AnimationState::with_opacity(fade_opacity(config, progress)),
        AnimationKind::SlideLeft => {
            AnimationState::with_translate(SWEEP_EXTENT_PCT - progress * SWEEP_TRAVEL_PCT, 0.0)
        }
        AnimationKind::SlideRight => {
            AnimationState::with_translate(-SWEEP_EXTENT_PCT + progress * SWEEP_TRAVEL_PCT, 0.0)
        }
        AnimationKind::SlideUp => {
            AnimationState::with_translate(0.0, SWEEP_EXTENT_PCT - progress * SWEEP_TRAVEL_PCT)
        }
        AnimationKind::SlideDown => {
            AnimationState::with_translate(0.0, -SWEEP_EXTENT_PCT + progress * SWEEP_TRAVEL_PCT)
        }
        AnimationKind::ZoomIn => {
            AnimationState::with_scale(ZOOM_MIN + progress * ZOOM_RANGE)
        }
        AnimationKind::ZoomOut => {
            AnimationState::with_scale(ZOOM_MAX - progress * ZOOM_RANGE)
        }
        AnimationKind::SlideHorizontal | AnimationKind::SlideVertical => state_at_progress(
            &AnimationConfig {
                kind: config.kind.canonical(),
                ..*config
            },
            progress,
        ),
    }
}

fn fade_opacity(config: &AnimationConfig, progress: f64) -> f64 {
    let (in_ratio, out_ratio) = config.fade_ratios();
    if in_ratio > 0.0 && progress < in_ratio {
        progress / in_ratio
    } else if out_ratio > 0.0 && progress > 1.0 - out_ratio {
        (1.0 - progress) / out_ratio
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/calc.rs"]
mod tests;
