use super::*;

#[test]
fn motion_kinds_repeat_with_gap() {
    for kind in [
        AnimationKind::SlideLeft,
        AnimationKind::SlideRight,
        AnimationKind::SlideUp,
        AnimationKind::SlideDown,
        AnimationKind::ZoomIn,
        AnimationKind::ZoomOut,
        AnimationKind::SlideHorizontal,
        AnimationKind::SlideVertical,
    ] {
        let c = AnimationConfig::for_slide(kind, 10.0);
        assert_eq!(c.kind, kind);
        assert_eq!(c.duration, 8.0);
        assert_eq!(c.delay, 0.0);
        assert_eq!(c.repeat, 2);
        assert_eq!(c.gap, 3.0);
    }
}

#[test]
fn fade_spans_whole_slide() {
    let c = AnimationConfig::for_slide(AnimationKind::FadeInOut, 10.0);
    assert_eq!(c.duration, 10.0);
    assert_eq!(c.repeat, 1);
    assert_eq!(c.gap, 0.0);
    assert_eq!(c.fade_in_duration, Some(0.6));
    assert_eq!(c.fade_out_duration, Some(0.8));
}

#[test]
fn none_uses_sweep_ratio_without_repeat() {
    let c = AnimationConfig::for_slide(AnimationKind::None, 5.0);
    assert_eq!(c.duration, 4.0);
    assert_eq!((c.repeat, c.gap), (1, 0.0));
}

#[test]
fn short_slides_shrink_fade_windows() {
    let c = AnimationConfig::for_slide(AnimationKind::ZoomIn, 2.0);
    assert_eq!(c.fade_in_duration, Some(0.2));
    assert_eq!(c.fade_out_duration, Some(0.4));
}

#[test]
fn total_duration_counts_inner_gaps() {
    let c = AnimationConfig::for_slide(AnimationKind::SlideLeft, 10.0);
    assert_eq!(c.total_duration(), Some(2.0 * 8.0 + 3.0));
    let forever = AnimationConfig { repeat: 0, ..c };
    assert_eq!(forever.total_duration(), None);
    let negative_gap = AnimationConfig { gap: -2.0, ..c };
    assert_eq!(negative_gap.total_duration(), Some(16.0));
}

#[test]
fn fade_ratios_clamp_each_window() {
    let c = AnimationConfig {
        fade_in_duration: Some(50.0),
        fade_out_duration: Some(-1.0),
        ..AnimationConfig::for_slide(AnimationKind::FadeInOut, 4.0)
    };
    assert_eq!(c.fade_ratios(), (1.0, 0.0));
}

#[test]
fn json_uses_type_key_and_defaults() {
    let c: AnimationConfig =
        serde_json::from_str(r#"{"type":"slide-up","duration":4}"#).unwrap();
    assert_eq!(c.kind, AnimationKind::SlideUp);
    assert_eq!(c.repeat, 1);
    assert_eq!(c.gap, 0.0);
    assert_eq!(c.fade_in_duration, None);

    let json = serde_json::to_value(AnimationConfig::for_slide(AnimationKind::ZoomOut, 10.0))
        .unwrap();
    assert_eq!(json["type"], "zoom-out");
    assert_eq!(json["fadeInDuration"], 0.6);
}
