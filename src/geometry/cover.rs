use crate::{
    foundation::core::{Size, Vec2, percent_of},
    slide::model::MediaTransform,
};

/// Where and how large a media asset is drawn inside its container.
///
/// The editor draws its resize/move handles from the same value the player draws the
/// frame from, so both must resolve identical inputs to identical output.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaGeometry {
    /// Cover-fit size before the operator's scale.
    pub base: Size,
    /// Operator scale multiplier per axis.
    pub scale: Vec2,
    /// Translation from the centered position, in container pixels.
    pub offset: Vec2,
    /// Final drawn size: `base * scale`.
    pub actual: Size,
}

impl MediaGeometry {
    /// Cover-fit `media` into `container`, then apply the operator `transform`.
    ///
    /// A media size with a zero component is treated as already covering the
    /// container along that axis.
    pub fn resolve(transform: MediaTransform, container: Size, media: Size) -> Self {
        let base_scale = if media.width > 0.0 && media.height > 0.0 {
            (container.width / media.width).max(container.height / media.height)
        } else {
            1.0
        };
        let base = Size::new(
            if media.width > 0.0 {
                media.width * base_scale
            } else {
                container.width
            },
            if media.height > 0.0 {
                media.height * base_scale
            } else {
                container.height
            },
        );
        let offset = Vec2::new(
            percent_of(transform.offset_pct.x, container.width),
            percent_of(transform.offset_pct.y, container.height),
        );

        Self {
            base,
            scale: transform.scale,
            offset,
            actual: Size::new(base.width * transform.scale.x, base.height * transform.scale.y),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/cover.rs"]
mod tests;
