use std::io::Read;

use crate::{
    animation::{effective::LayerAnimationFields, kind::AnimationKind},
    foundation::core::{Size, Vec2},
    foundation::defaults,
    foundation::error::{MotionError, MotionResult},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One screen of signage content.
///
/// Field names and the flat `text*`/`media*` animation fields mirror the slide content
/// stored by the content manager, so a persisted record deserializes unchanged.
/// Every optional field falls back to the values in [`crate::defaults`].
pub struct Slide {
    /// Stable slide identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Background color as a CSS hex string.
    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// Image file name, when the slide shows an image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Video file name, when the slide shows a video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Audio file name played under the slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,

    /// Horizontal media scale on top of the cover fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_scale_x: Option<f64>,
    /// Vertical media scale on top of the cover fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_scale_y: Option<f64>,
    /// Horizontal media offset, percent of the container width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_offset_x: Option<f64>,
    /// Vertical media offset, percent of the container height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_offset_y: Option<f64>,

    /// Media animation kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_animation: Option<AnimationKind>,
    /// Media animation cycle length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_animation_duration: Option<f64>,
    /// Media animation delay in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_animation_delay: Option<f64>,
    /// Media animation repeat count, `0` for infinite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_animation_repeat: Option<f64>,
    /// Media animation gap between repeats in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_animation_gap: Option<f64>,
    /// Media fade-in window in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_fade_in_duration: Option<f64>,
    /// Media fade-out window in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_fade_out_duration: Option<f64>,

    /// Text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Text color as a CSS hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Font size in virtual pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Text anchor X in percent of the screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_position_x: Option<f64>,
    /// Text anchor Y in percent of the screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_position_y: Option<f64>,

    /// Text animation kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_animation: Option<AnimationKind>,
    /// Text animation cycle length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_animation_duration: Option<f64>,
    /// Text animation delay in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_animation_delay: Option<f64>,
    /// Text animation repeat count, `0` for infinite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_animation_repeat: Option<f64>,
    /// Text animation gap between repeats in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_animation_gap: Option<f64>,
    /// Text fade-in window in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_fade_in_duration: Option<f64>,
    /// Text fade-out window in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_fade_out_duration: Option<f64>,

    /// Virtual design width the slide was authored against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_width: Option<f64>,
    /// Virtual design height the slide was authored against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_height: Option<f64>,

    /// Playback duration in seconds.
    pub duration: f64,
}

fn default_background_color() -> String {
    defaults::BACKGROUND_COLOR.to_string()
}

/// Animated layer of a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// The image or video layer.
    Media,
    /// The text layer.
    Text,
}

/// What a slide shows, as summarized in playlist previews.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Has a video (takes precedence over image and text).
    Video,
    /// Has an image.
    Image,
    /// Text only.
    Text,
    /// Background color only.
    Empty,
}

/// Operator-set media placement: scale over the cover fit and offset in percent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaTransform {
    /// Per-axis scale multiplier.
    pub scale: Vec2,
    /// Per-axis offset in percent of the container.
    pub offset_pct: Vec2,
}

impl Default for MediaTransform {
    fn default() -> Self {
        Self {
            scale: Vec2::new(defaults::MEDIA_SCALE, defaults::MEDIA_SCALE),
            offset_pct: Vec2::new(defaults::MEDIA_OFFSET_PCT, defaults::MEDIA_OFFSET_PCT),
        }
    }
}

impl Slide {
    /// A blank slide of `duration` seconds with every optional field unset.
    pub fn new(id: impl Into<String>, duration: f64) -> Self {
        Self {
            id: id.into(),
            background_color: default_background_color(),
            duration,
            ..Self::default()
        }
    }

    /// Parse and validate a slide from JSON text.
    #[tracing::instrument(level = "debug", skip(json))]
    pub fn from_json_str(json: &str) -> MotionResult<Self> {
        let slide: Self = serde_json::from_str(json)?;
        slide.validate()?;
        Ok(slide)
    }

    /// Parse and validate a slide from a JSON reader.
    pub fn from_json_reader<R: Read>(reader: R) -> MotionResult<Self> {
        let slide: Self = serde_json::from_reader(reader)?;
        slide.validate()?;
        tracing::debug!(id = %slide.id, duration = slide.duration, "loaded slide");
        Ok(slide)
    }

    /// Check the invariants the engine relies on but never re-checks itself.
    pub fn validate(&self) -> MotionResult<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(MotionError::validation(
                "slide duration must be finite and > 0",
            ));
        }

        for (name, value) in [
            ("resolutionWidth", self.resolution_width),
            ("resolutionHeight", self.resolution_height),
            ("fontSize", self.font_size),
        ] {
            if let Some(v) = value
                && (!v.is_finite() || v <= 0.0)
            {
                return Err(MotionError::validation(format!(
                    "{name} must be finite and > 0 when set"
                )));
            }
        }

        for (name, value) in [
            ("mediaScaleX", self.media_scale_x),
            ("mediaScaleY", self.media_scale_y),
            ("mediaOffsetX", self.media_offset_x),
            ("mediaOffsetY", self.media_offset_y),
            ("textPositionX", self.text_position_x),
            ("textPositionY", self.text_position_y),
        ] {
            if let Some(v) = value
                && !v.is_finite()
            {
                return Err(MotionError::validation(format!(
                    "{name} must be finite when set"
                )));
            }
        }

        for layer in [Layer::Media, Layer::Text] {
            self.animation_fields(layer).validate(layer)?;
        }
        Ok(())
    }

    /// Flat animation fields of `layer`, gathered into one view.
    pub fn animation_fields(&self, layer: Layer) -> LayerAnimationFields {
        match layer {
            Layer::Media => LayerAnimationFields {
                kind: self.media_animation,
                duration: self.media_animation_duration,
                delay: self.media_animation_delay,
                repeat: self.media_animation_repeat,
                gap: self.media_animation_gap,
                fade_in_duration: self.media_fade_in_duration,
                fade_out_duration: self.media_fade_out_duration,
            },
            Layer::Text => LayerAnimationFields {
                kind: self.text_animation,
                duration: self.text_animation_duration,
                delay: self.text_animation_delay,
                repeat: self.text_animation_repeat,
                gap: self.text_animation_gap,
                fade_in_duration: self.text_fade_in_duration,
                fade_out_duration: self.text_fade_out_duration,
            },
        }
    }

    /// Write `fields` back into the flat fields of `layer`.
    pub fn set_animation_fields(&mut self, layer: Layer, fields: LayerAnimationFields) {
        let LayerAnimationFields {
            kind,
            duration,
            delay,
            repeat,
            gap,
            fade_in_duration,
            fade_out_duration,
        } = fields;
        match layer {
            Layer::Media => {
                self.media_animation = kind;
                self.media_animation_duration = duration;
                self.media_animation_delay = delay;
                self.media_animation_repeat = repeat;
                self.media_animation_gap = gap;
                self.media_fade_in_duration = fade_in_duration;
                self.media_fade_out_duration = fade_out_duration;
            }
            Layer::Text => {
                self.text_animation = kind;
                self.text_animation_duration = duration;
                self.text_animation_delay = delay;
                self.text_animation_repeat = repeat;
                self.text_animation_gap = gap;
                self.text_fade_in_duration = fade_in_duration;
                self.text_fade_out_duration = fade_out_duration;
            }
        }
    }

    /// Assign `kind` to `layer` and fill its fields from the default config builder.
    pub fn assign_animation(&mut self, layer: Layer, kind: AnimationKind) {
        let config = crate::animation::config::AnimationConfig::for_slide(kind, self.duration);
        self.set_animation_fields(layer, LayerAnimationFields::from_config(&config));
    }

    /// Media scale/offset with defaults applied.
    pub fn media_transform(&self) -> MediaTransform {
        let d = MediaTransform::default();
        MediaTransform {
            scale: Vec2::new(
                self.media_scale_x.unwrap_or(d.scale.x),
                self.media_scale_y.unwrap_or(d.scale.y),
            ),
            offset_pct: Vec2::new(
                self.media_offset_x.unwrap_or(d.offset_pct.x),
                self.media_offset_y.unwrap_or(d.offset_pct.y),
            ),
        }
    }

    /// Authored virtual resolution; unset components stay `0` so callers can fall back.
    pub fn resolution(&self) -> Size {
        Size::new(
            self.resolution_width.unwrap_or(0.0),
            self.resolution_height.unwrap_or(0.0),
        )
    }

    /// Summary of what the slide shows.
    pub fn content_kind(&self) -> ContentKind {
        if self.video.is_some() {
            ContentKind::Video
        } else if self.image.is_some() {
            ContentKind::Image
        } else if self.text.as_deref().is_some_and(|t| !t.is_empty()) {
            ContentKind::Text
        } else {
            ContentKind::Empty
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slide/model.rs"]
mod tests;
