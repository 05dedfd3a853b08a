use crate::{
    animation::{
        calc::calculate_state, config::AnimationConfig, effective::resolve_effective_config,
        state::AnimationState,
    },
    foundation::core::{Affine, Point, Rect, Size, Vec2},
    geometry::cover::MediaGeometry,
    slide::model::{Layer, Slide},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Placement of the media layer inside its container at one instant.
///
/// The element is a `box_size` rectangle centered on `center`, moved by `offset`
/// (pixels) and `translate_pct` (percent of `box_size`), then scaled by `scale`
/// around its own center.
pub struct MediaRenderStyle {
    /// Cover-fit geometry the placement is built on.
    pub geometry: MediaGeometry,
    /// Effective animation config that was sampled.
    pub config: AnimationConfig,
    /// Sampled animation state.
    pub state: AnimationState,
    /// Container center in container pixels.
    pub center: Point,
    /// Unscaled element size (the cover-fit base size).
    pub box_size: Size,
    /// Geometry offset in container pixels.
    pub offset: Vec2,
    /// Animation translation in percent of `box_size`.
    pub translate_pct: Vec2,
    /// Combined scale: operator scale times animation scale.
    pub scale: Vec2,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
}

impl MediaRenderStyle {
    /// Map element-local coordinates (origin at the element center) to container pixels.
    pub fn affine(&self) -> Affine {
        let translate_px = Vec2::new(
            self.translate_pct.x / 100.0 * self.box_size.width,
            self.translate_pct.y / 100.0 * self.box_size.height,
        );
        Affine::translate(self.center.to_vec2() + self.offset + translate_px)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }

    /// Container-space rectangle covered by the drawn media.
    pub fn drawn_bounds(&self) -> Rect {
        self.affine()
            .transform_rect_bbox(Rect::from_center_size(Point::ZERO, self.box_size))
    }

    /// CSS transform for an element positioned at `left: 50%; top: 50%`.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translate({}px, {}px) translate({}%, {}%) scale({}, {})",
            self.offset.x,
            self.offset.y,
            self.translate_pct.x,
            self.translate_pct.y,
            self.scale.x,
            self.scale.y
        )
    }
}

/// Compose the media layer of `slide` at `time` seconds.
///
/// `container` is the measured drawing surface and `media` the natural pixel size of
/// the image or video frame (zero when not yet known).
#[tracing::instrument(level = "trace", skip(slide), fields(slide = %slide.id))]
pub fn compose_media(slide: &Slide, container: Size, media: Size, time: f64) -> MediaRenderStyle {
    let geometry = MediaGeometry::resolve(slide.media_transform(), container, media);
    let config = resolve_effective_config(&slide.animation_fields(Layer::Media), slide.duration);
    let state = calculate_state(&config, time);

    MediaRenderStyle {
        geometry,
        config,
        state,
        center: Point::new(container.width * 0.5, container.height * 0.5),
        box_size: geometry.base,
        offset: geometry.offset,
        translate_pct: Vec2::new(state.translate_x, state.translate_y),
        scale: Vec2::new(geometry.scale.x * state.scale, geometry.scale.y * state.scale),
        opacity: state.opacity,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/media.rs"]
mod tests;
