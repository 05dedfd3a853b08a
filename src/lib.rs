//! Slidemotion is the animation and layout geometry engine behind a digital signage player.
//!
//! Given a slide record and an instant on its timeline, the engine answers one question:
//! where, how big and how visible is each layer right now? The same answer is used by the
//! editor preview, the timeline scrubber and the device player so all three agree frame
//! for frame.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Slide + Layer -> AnimationConfig` (slide fields folded over per-kind defaults)
//! 2. **Sample**: `AnimationConfig + time -> AnimationState` (opacity, translation, scale)
//! 3. **Compose**: `AnimationState + geometry -> MediaRenderStyle` / `TextRenderStyle`
//!
//! Every step is a pure function of its inputs. Sampling the same time twice gives the same
//! state, and nothing in the engine owns a clock: [`TimelineClock`] and
//! [`PlaylistTimeline`] are separate helpers that only produce times to sample.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total numerics**: degenerate durations, sizes and progress values are clamped,
//!   never reported as errors. Errors only come from parsing and validating slide data.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod foundation;
mod geometry;
mod playback;
mod slide;

pub use animation::calc::{
    AnimationPhase, calculate_state, parked_state, phase_at, progress_at, state_at_progress,
};
pub use animation::config::AnimationConfig;
pub use animation::effective::{LayerAnimationFields, resolve_effective_config};
pub use animation::kind::{AnimationKind, SweepAxis};
pub use animation::state::AnimationState;
pub use compose::media::{MediaRenderStyle, compose_media};
pub use compose::text::{TextFrame, TextRenderStyle, TextTranslate, compose_text};
pub use foundation::core::{Affine, Point, Rect, Size, Vec2, parse_size, percent_of};
pub use foundation::defaults;
pub use foundation::error::{MotionError, MotionResult};
pub use geometry::cover::MediaGeometry;
pub use geometry::resolution::ResolutionScale;
pub use playback::clock::TimelineClock;
pub use playback::playlist::{PlaylistPosition, PlaylistTimeline, format_duration_seconds};
pub use slide::model::{ContentKind, Layer, MediaTransform, Slide};
