use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{MotionError, MotionResult};

/// Every animation that can be assigned to a text or media layer.
///
/// `SlideHorizontal` and `SlideVertical` are legacy spellings kept so previously
/// authored slides still load; they share the motion law of [`AnimationKind::SlideRight`]
/// and [`AnimationKind::SlideUp`] (see [`AnimationKind::canonical`]).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    /// Always fully visible, never moves.
    #[default]
    None,
    /// Fade in, hold, fade out.
    FadeInOut,
    /// Sweep from right off-screen to left off-screen.
    SlideLeft,
    /// Sweep from left off-screen to right off-screen.
    SlideRight,
    /// Sweep from bottom off-screen to top off-screen.
    SlideUp,
    /// Sweep from top off-screen to bottom off-screen.
    SlideDown,
    /// Grow from 0.3x to 3x.
    ZoomIn,
    /// Shrink from 3x to 0.3x.
    ZoomOut,
    /// Legacy alias of [`AnimationKind::SlideRight`].
    SlideHorizontal,
    /// Legacy alias of [`AnimationKind::SlideUp`].
    SlideVertical,
}

/// Axis along which a slide kind sweeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepAxis {
    /// Left/right sweeps.
    Horizontal,
    /// Up/down sweeps.
    Vertical,
}

// alias -> canonical
const ALIASES: [(AnimationKind, AnimationKind); 2] = [
    (AnimationKind::SlideHorizontal, AnimationKind::SlideRight),
    (AnimationKind::SlideVertical, AnimationKind::SlideUp),
];

impl AnimationKind {
    /// All kinds, canonical ones first.
    pub const ALL: [AnimationKind; 10] = [
        Self::None,
        Self::FadeInOut,
        Self::SlideLeft,
        Self::SlideRight,
        Self::SlideUp,
        Self::SlideDown,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::SlideHorizontal,
        Self::SlideVertical,
    ];

    /// Resolve a legacy alias to the kind whose motion law it shares.
    pub fn canonical(self) -> Self {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == self)
            .map(|(_, target)| *target)
            .unwrap_or(self)
    }

    /// `true` for the legacy `slide-horizontal`/`slide-vertical` spellings.
    pub fn is_legacy_sweep(self) -> bool {
        self.canonical() != self
    }

    /// `true` for slide and zoom kinds, which repeat by default.
    pub fn is_motion(self) -> bool {
        match self {
            Self::None | Self::FadeInOut => false,
            Self::SlideLeft
            | Self::SlideRight
            | Self::SlideUp
            | Self::SlideDown
            | Self::ZoomIn
            | Self::ZoomOut
            | Self::SlideHorizontal
            | Self::SlideVertical => true,
        }
    }

    /// Sweep axis for slide kinds, `None` otherwise.
    pub fn sweep_axis(self) -> Option<SweepAxis> {
        match self {
            Self::SlideLeft | Self::SlideRight | Self::SlideHorizontal => {
                Some(SweepAxis::Horizontal)
            }
            Self::SlideUp | Self::SlideDown | Self::SlideVertical => Some(SweepAxis::Vertical),
            Self::None | Self::FadeInOut | Self::ZoomIn | Self::ZoomOut => None,
        }
    }

    /// Persisted spelling of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FadeInOut => "fade-in-out",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::SlideUp => "slide-up",
            Self::SlideDown => "slide-down",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::SlideHorizontal => "slide-horizontal",
            Self::SlideVertical => "slide-vertical",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationKind {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        let needle = s.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(MotionError::validation("animation kind must be non-empty"));
        }
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| MotionError::validation(format!("unknown animation kind '{needle}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/kind.rs"]
mod tests;
