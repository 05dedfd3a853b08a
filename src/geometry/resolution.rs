use crate::foundation::{
    core::{Size, Vec2},
    defaults,
};

/// Ratio between the pixels a slide is rendered into and the virtual grid it was
/// authored against.
///
/// Lengths authored in virtual pixels (font size, sweep travel) are multiplied by
/// this scale; percentage-of-self translations need no rescaling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionScale {
    /// Virtual resolution actually used after fallbacks.
    pub virtual_size: Size,
    /// Actual screen pixels per virtual pixel, horizontally.
    pub scale_x: f64,
    /// Actual screen pixels per virtual pixel, vertically.
    pub scale_y: f64,
}

impl ResolutionScale {
    /// Resolve the scale for a slide authored at `authored` rendered into `screen`.
    ///
    /// Each virtual axis is the first positive of: the authored value, the screen
    /// size, the 1920×1080 default.
    pub fn new(authored: Size, screen: Size) -> Self {
        let pick = |a: f64, s: f64, fallback: f64| {
            if a > 0.0 {
                a
            } else if s > 0.0 {
                s
            } else {
                fallback
            }
        };
        let virtual_size = Size::new(
            pick(authored.width, screen.width, defaults::RESOLUTION_WIDTH),
            pick(authored.height, screen.height, defaults::RESOLUTION_HEIGHT),
        );
        Self {
            virtual_size,
            scale_x: screen.width / virtual_size.width,
            scale_y: screen.height / virtual_size.height,
        }
    }

    /// Convert a measured screen-pixel size back to virtual pixels.
    pub fn to_virtual(&self, size: Size) -> Size {
        Size::new(
            if self.scale_x > 0.0 {
                size.width / self.scale_x
            } else {
                size.width
            },
            if self.scale_y > 0.0 {
                size.height / self.scale_y
            } else {
                size.height
            },
        )
    }

    /// Convert a virtual-pixel vector to screen pixels.
    pub fn to_screen(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.scale_x, v.y * self.scale_y)
    }

    /// Rendered font size in whole screen pixels, never below the legibility floor.
    pub fn font_px(&self, font_size: f64) -> f64 {
        (font_size * self.scale_x)
            .round()
            .max(defaults::MIN_RENDERED_FONT_PX)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolution.rs"]
mod tests;
