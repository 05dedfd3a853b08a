use crate::{
    animation::{
        calc::{calculate_state, progress_at},
        config::AnimationConfig,
        effective::resolve_effective_config,
        kind::{AnimationKind, SweepAxis},
        state::AnimationState,
    },
    foundation::core::{Affine, Point, Size, Vec2, percent_of},
    foundation::defaults,
    geometry::resolution::ResolutionScale,
    slide::model::{Layer, Slide},
};

/// Measurements of the surface a text layer is drawn on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFrame {
    /// Actual pixel size of the slide surface.
    pub screen: Size,
    /// Position of the slide surface inside the drawing canvas.
    pub screen_offset: Vec2,
    /// Measured size of the rendered text box, in screen pixels.
    pub text_size: Size,
}

impl TextFrame {
    /// Frame at the canvas origin.
    pub fn new(screen: Size, text_size: Size) -> Self {
        Self {
            screen,
            screen_offset: Vec2::ZERO,
            text_size,
        }
    }
}

/// Animation translation of a text box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum TextTranslate {
    /// Percent of the text box's own size.
    Percent {
        /// Horizontal percent.
        x: f64,
        /// Vertical percent.
        y: f64,
    },
    /// Screen pixels, used by the legacy sweeps that must clear the frame edge.
    Pixels {
        /// Horizontal pixels.
        x: f64,
        /// Vertical pixels.
        y: f64,
    },
}

impl TextTranslate {
    /// Translation in screen pixels for a text box of `text_size`.
    pub fn to_pixels(self, text_size: Size) -> Vec2 {
        match self {
            Self::Percent { x, y } => Vec2::new(
                percent_of(x, text_size.width),
                percent_of(y, text_size.height),
            ),
            Self::Pixels { x, y } => Vec2::new(x, y),
        }
    }

    fn css(self) -> String {
        match self {
            Self::Percent { x, y } => format!("translate({x}%, {y}%)"),
            Self::Pixels { x, y } => format!("translate({x}px, {y}px)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Placement of the text layer at one instant.
///
/// The text box is centered on `anchor` and moved by `translate`. Text is never
/// scaled: zoom kinds leave it at its authored size and only `state.scale` records
/// the sampled zoom, so the web preview and the player draw the same box.
pub struct TextRenderStyle {
    /// Effective animation config that was sampled.
    pub config: AnimationConfig,
    /// Sampled animation state.
    pub state: AnimationState,
    /// Virtual-to-screen scale the lengths were converted with.
    pub resolution: ResolutionScale,
    /// Anchor position in percent of the screen, after sweep-axis locking.
    pub position_pct: Vec2,
    /// Anchor position in canvas pixels.
    pub anchor: Point,
    /// Rendered font size in screen pixels.
    pub font_size_px: f64,
    /// Text color as a CSS hex string.
    pub color: String,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
    /// Animation translation.
    pub translate: TextTranslate,
}

impl TextRenderStyle {
    /// Map text-local coordinates (origin at the text box center) to canvas pixels.
    pub fn affine(&self, text_size: Size) -> Affine {
        Affine::translate(self.anchor.to_vec2() + self.translate.to_pixels(text_size))
    }

    /// CSS transform for an element positioned at `anchor`.
    pub fn css_transform(&self) -> String {
        format!("translate(-50%, -50%) {}", self.translate.css())
    }
}

/// Compose the text layer of `slide` at `time` seconds.
///
/// A text that sweeps along an axis ignores its authored position on that axis and
/// sweeps through the screen center. The legacy `slide-horizontal`/`slide-vertical`
/// kinds travel `(resolution + text size) / 2` virtual pixels to each side so the text
/// fully clears the frame whatever its rendered size; every other kind translates by a
/// percentage of the text box, which needs no resolution scaling.
#[tracing::instrument(level = "trace", skip(slide), fields(slide = %slide.id))]
pub fn compose_text(slide: &Slide, frame: &TextFrame, time: f64) -> TextRenderStyle {
    let config = resolve_effective_config(&slide.animation_fields(Layer::Text), slide.duration);
    let kind = config.kind;
    let state = calculate_state(&config, time);

    let mut position_pct = Vec2::new(
        slide.text_position_x.unwrap_or(defaults::TEXT_POSITION_PCT),
        slide.text_position_y.unwrap_or(defaults::TEXT_POSITION_PCT),
    );
    match kind.sweep_axis() {
        Some(SweepAxis::Horizontal) => position_pct.x = defaults::TEXT_POSITION_PCT,
        Some(SweepAxis::Vertical) => position_pct.y = defaults::TEXT_POSITION_PCT,
        None => {}
    }

    let resolution = ResolutionScale::new(slide.resolution(), frame.screen);
    let translate = if kind.is_legacy_sweep() {
        legacy_sweep_translate(kind, &config, &resolution, frame.text_size, time)
    } else {
        TextTranslate::Percent {
            x: state.translate_x,
            y: state.translate_y,
        }
    };

    TextRenderStyle {
        config,
        state,
        resolution,
        position_pct,
        anchor: Point::new(
            frame.screen_offset.x + percent_of(position_pct.x, frame.screen.width),
            frame.screen_offset.y + percent_of(position_pct.y, frame.screen.height),
        ),
        font_size_px: resolution.font_px(slide.font_size.unwrap_or(defaults::FONT_SIZE)),
        color: slide
            .text_color
            .clone()
            .unwrap_or_else(|| defaults::TEXT_COLOR.to_string()),
        opacity: state.opacity,
        translate,
    }
}

fn legacy_sweep_translate(
    kind: AnimationKind,
    config: &AnimationConfig,
    resolution: &ResolutionScale,
    text_size: Size,
    time: f64,
) -> TextTranslate {
    let progress = progress_at(config, time);
    let text = resolution.to_virtual(text_size);
    let span_w = resolution.virtual_size.width + text.width;
    let span_h = resolution.virtual_size.height + text.height;

    let travel = match kind.sweep_axis() {
        Some(SweepAxis::Horizontal) => Vec2::new(-(span_w / 2.0) + progress * span_w, 0.0),
        Some(SweepAxis::Vertical) => Vec2::new(0.0, span_h / 2.0 - progress * span_h),
        None => Vec2::ZERO,
    };
    let px = resolution.to_screen(travel);
    TextTranslate::Pixels { x: px.x, y: px.y }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/text.rs"]
mod tests;
