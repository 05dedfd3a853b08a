use super::*;

const PERSISTED: &str = r##"{
    "id": "slide-7",
    "name": "Spring sale",
    "backgroundColor": "#112233",
    "image": "spring.jpg",
    "mediaScaleX": 1.2,
    "mediaOffsetY": -5,
    "mediaAnimation": "zoom-out",
    "text": "Up to 50% off",
    "textColor": "#ffffff",
    "fontSize": 64,
    "textAnimation": "slide-horizontal",
    "textAnimationRepeat": 2,
    "textAnimationGap": 1.5,
    "resolutionWidth": 1080,
    "resolutionHeight": 1920,
    "duration": 12
}"##;

#[test]
fn parses_persisted_camel_case_record() {
    let slide = Slide::from_json_str(PERSISTED).unwrap();
    assert_eq!(slide.id, "slide-7");
    assert_eq!(slide.background_color, "#112233");
    assert_eq!(slide.media_animation, Some(AnimationKind::ZoomOut));
    assert_eq!(slide.text_animation, Some(AnimationKind::SlideHorizontal));
    assert_eq!(slide.text_animation_repeat, Some(2.0));
    assert_eq!(slide.resolution(), Size::new(1080.0, 1920.0));
    assert_eq!(slide.duration, 12.0);
    assert_eq!(slide.content_kind(), ContentKind::Image);
}

#[test]
fn minimal_record_gets_defaults() {
    let slide = Slide::from_json_str(r#"{"duration": 5}"#).unwrap();
    assert_eq!(slide.background_color, "#000000");
    assert_eq!(slide.media_transform(), MediaTransform::default());
    assert_eq!(slide.resolution(), Size::ZERO);
    assert_eq!(slide.content_kind(), ContentKind::Empty);
    assert_eq!(
        slide.animation_fields(Layer::Text),
        LayerAnimationFields::default()
    );
}

#[test]
fn media_transform_fills_missing_axes() {
    let slide = Slide::from_json_str(PERSISTED).unwrap();
    let t = slide.media_transform();
    assert_eq!(t.scale, Vec2::new(1.2, 1.0));
    assert_eq!(t.offset_pct, Vec2::new(0.0, -5.0));
}

#[test]
fn layer_views_read_their_own_prefix() {
    let slide = Slide::from_json_str(PERSISTED).unwrap();
    let text = slide.animation_fields(Layer::Text);
    assert_eq!(text.kind, Some(AnimationKind::SlideHorizontal));
    assert_eq!(text.gap, Some(1.5));
    let media = slide.animation_fields(Layer::Media);
    assert_eq!(media.kind, Some(AnimationKind::ZoomOut));
    assert_eq!(media.gap, None);
}

#[test]
fn assign_animation_writes_builder_defaults() {
    let mut slide = Slide::new("a", 10.0);
    slide.assign_animation(Layer::Media, AnimationKind::SlideUp);
    assert_eq!(slide.media_animation, Some(AnimationKind::SlideUp));
    assert_eq!(slide.media_animation_duration, Some(8.0));
    assert_eq!(slide.media_animation_repeat, Some(2.0));
    assert_eq!(slide.media_animation_gap, Some(3.0));
    assert_eq!(slide.media_fade_in_duration, Some(0.6));
    assert_eq!(slide.text_animation, None);

    slide.assign_animation(Layer::Text, AnimationKind::FadeInOut);
    assert_eq!(slide.text_animation_duration, Some(10.0));
    assert_eq!(slide.text_animation_repeat, Some(1.0));
}

#[test]
fn content_kind_prefers_video() {
    let mut slide = Slide::new("c", 3.0);
    slide.text = Some(String::new());
    assert_eq!(slide.content_kind(), ContentKind::Empty);
    slide.text = Some("hi".to_string());
    assert_eq!(slide.content_kind(), ContentKind::Text);
    slide.image = Some("a.png".to_string());
    assert_eq!(slide.content_kind(), ContentKind::Image);
    slide.video = Some("a.mp4".to_string());
    assert_eq!(slide.content_kind(), ContentKind::Video);
}

#[test]
fn validate_rejects_bad_records() {
    assert!(Slide::from_json_str(r#"{"duration": 0}"#).is_err());
    assert!(Slide::from_json_str(r#"{"duration": -3}"#).is_err());
    assert!(Slide::from_json_str(r#"{"duration": 5, "resolutionWidth": 0}"#).is_err());
    assert!(Slide::from_json_str(r#"{"duration": 5, "textAnimationDelay": -1}"#).is_err());
    assert!(Slide::from_json_str(r#"{"duration": 5, "mediaFadeInDuration": -0.5}"#).is_err());
    assert!(Slide::from_json_str(r#"{"duration": 5, "textAnimation": "spin"}"#).is_err());
    assert!(Slide::from_json_str(r#"{"name": "no duration"}"#).is_err());

    let mut slide = Slide::new("x", 5.0);
    slide.media_scale_x = Some(f64::INFINITY);
    let err = slide.validate().unwrap_err();
    assert!(err.to_string().contains("mediaScaleX"));
}

#[test]
fn serialization_skips_unset_fields() {
    let json = serde_json::to_value(Slide::new("s", 4.0)).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj["duration"], 4.0);
    assert!(!obj.contains_key("textAnimation"));
    assert!(!obj.contains_key("mediaScaleX"));
    assert_eq!(obj["backgroundColor"], "#000000");
}

#[test]
fn from_reader_matches_from_str() {
    let a = Slide::from_json_str(PERSISTED).unwrap();
    let b = Slide::from_json_reader(PERSISTED.as_bytes()).unwrap();
    assert_eq!(a, b);
}
