/// Visual state of a layer at one instant.
///
/// Translations are percentages of the element's own box; `scale` multiplies the
/// element around its center. Both renderers must reproduce these numbers exactly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal translation in `[-120, 120]` percent of the element width.
    pub translate_x: f64,
    /// Vertical translation in `[-120, 120]` percent of the element height.
    pub translate_y: f64,
    /// Uniform scale in `[0.3, 3]`.
    pub scale: f64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AnimationState {
    /// Fully visible, untransformed.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub(crate) fn with_opacity(opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::IDENTITY
        }
    }

    pub(crate) fn with_translate(translate_x: f64, translate_y: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            ..Self::IDENTITY
        }
    }

    pub(crate) fn with_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// CSS transform used by the web preview for percentage-based motion.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}%, {}%) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}
