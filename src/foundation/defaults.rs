//! Authoring defaults shared by the editor, the preview and the device player.

/// Virtual design resolution width used when a slide does not carry one.
pub const RESOLUTION_WIDTH: f64 = 1920.0;
/// Virtual design resolution height used when a slide does not carry one.
pub const RESOLUTION_HEIGHT: f64 = 1080.0;

/// Slide playback duration in seconds for newly created slides.
pub const SLIDE_DURATION: f64 = 10.0;

/// Authored font size in virtual pixels.
pub const FONT_SIZE: f64 = 32.0;
/// Smallest font size ever rendered, in screen pixels.
pub const MIN_RENDERED_FONT_PX: f64 = 8.0;

/// Slide background color.
pub const BACKGROUND_COLOR: &str = "#000000";
/// Text fill color.
pub const TEXT_COLOR: &str = "#000000";

/// Text anchor position in percent of the screen.
pub const TEXT_POSITION_PCT: f64 = 50.0;

/// Media scale multiplier on top of the cover fit.
pub const MEDIA_SCALE: f64 = 1.0;
/// Media offset in percent of the container.
pub const MEDIA_OFFSET_PCT: f64 = 0.0;

/// Fraction of the slide duration used by one sweep/zoom cycle.
pub const ANIMATION_DURATION_RATIO: f64 = 0.8;
/// Repeat count for slide/zoom kinds.
pub const MOTION_REPEAT: u32 = 2;
/// Gap in seconds between repeats of slide/zoom kinds.
pub const MOTION_GAP: f64 = 3.0;

/// Default fade-in is `min(FADE_IN_CAP, FADE_IN_RATIO * duration)`.
pub const FADE_IN_CAP: f64 = 0.6;
/// See [`FADE_IN_CAP`].
pub const FADE_IN_RATIO: f64 = 0.1;
/// Default fade-out is `min(FADE_OUT_CAP, FADE_OUT_RATIO * duration)`.
pub const FADE_OUT_CAP: f64 = 0.8;
/// See [`FADE_OUT_CAP`].
pub const FADE_OUT_RATIO: f64 = 0.2;

/// Lower bound for a sweep cycle fitted into the slide duration.
pub const MIN_FITTED_DURATION: f64 = 0.1;
/// Duration floor used when turning fade seconds into ratios.
pub const MIN_FADE_BASE_DURATION: f64 = 0.001;

/// Editor playback tick.
pub const TICK_INTERVAL_MS: u64 = 33;

/// Default fade-in window for a slide of `slide_duration` seconds.
pub fn fade_in_for(slide_duration: f64) -> f64 {
    FADE_IN_CAP.min(slide_duration * FADE_IN_RATIO)
}

/// Default fade-out window for a slide of `slide_duration` seconds.
pub fn fade_out_for(slide_duration: f64) -> f64 {
    FADE_OUT_CAP.min(slide_duration * FADE_OUT_RATIO)
}
