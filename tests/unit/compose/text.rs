use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn slide(kind: AnimationKind) -> Slide {
    Slide {
        text: Some("Grand opening".to_string()),
        text_animation: Some(kind),
        text_position_x: Some(20.0),
        text_position_y: Some(30.0),
        resolution_width: Some(1920.0),
        resolution_height: Some(1080.0),
        ..Slide::new("s1", 10.0)
    }
}

// half-resolution preview with a 200x40 rendered text box (400x80 virtual)
fn half_frame() -> TextFrame {
    TextFrame::new(Size::new(960.0, 540.0), Size::new(200.0, 40.0))
}

#[test]
fn static_text_sits_at_authored_position() {
    let s = compose_text(&slide(AnimationKind::None), &half_frame(), 3.0);
    assert_eq!(s.position_pct, Vec2::new(20.0, 30.0));
    assert!(approx(s.anchor.x, 192.0));
    assert!(approx(s.anchor.y, 162.0));
    assert_eq!(s.translate, TextTranslate::Percent { x: 0.0, y: 0.0 });
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.font_size_px, 16.0);
    assert_eq!(s.color, "#000000");
}

#[test]
fn legacy_horizontal_sweep_clears_the_frame() {
    let s = slide(AnimationKind::SlideHorizontal);
    let frame = half_frame();

    let start = compose_text(&s, &frame, 0.0);
    assert_eq!(start.position_pct, Vec2::new(50.0, 30.0));
    assert_eq!(start.translate, TextTranslate::Pixels { x: -580.0, y: 0.0 });

    let mid = compose_text(&s, &frame, 5.0);
    assert_eq!(mid.translate, TextTranslate::Pixels { x: 0.0, y: 0.0 });

    let end = compose_text(&s, &frame, 10.0);
    assert_eq!(end.translate, TextTranslate::Pixels { x: 580.0, y: 0.0 });

    // the left edge of the box has passed the right edge of the screen
    let left_edge = end.anchor.x + 580.0 - frame.text_size.width / 2.0;
    assert!(left_edge >= frame.screen.width);
}

#[test]
fn legacy_vertical_sweep_moves_bottom_to_top() {
    let s = slide(AnimationKind::SlideVertical);
    let frame = half_frame();
    let start = compose_text(&s, &frame, 0.0);
    assert_eq!(start.position_pct, Vec2::new(20.0, 50.0));
    assert_eq!(start.translate, TextTranslate::Pixels { x: 0.0, y: 290.0 });
    let end = compose_text(&s, &frame, 10.0);
    assert_eq!(end.translate, TextTranslate::Pixels { x: 0.0, y: -290.0 });
}

#[test]
fn legacy_sweep_travel_is_resolution_independent() {
    let s = slide(AnimationKind::SlideHorizontal);
    let full = compose_text(
        &s,
        &TextFrame::new(Size::new(1920.0, 1080.0), Size::new(400.0, 80.0)),
        2.5,
    );
    let half = compose_text(&s, &half_frame(), 2.5);
    let (TextTranslate::Pixels { x: fx, .. }, TextTranslate::Pixels { x: hx, .. }) =
        (full.translate, half.translate)
    else {
        panic!("legacy sweeps translate in pixels");
    };
    assert!(approx(fx / full.resolution.scale_x, hx / half.resolution.scale_x));
}

#[test]
fn legacy_sweep_parks_off_screen_during_delay() {
    let s = Slide {
        text_animation_delay: Some(2.0),
        ..slide(AnimationKind::SlideHorizontal)
    };
    let parked = compose_text(&s, &half_frame(), 1.0);
    assert_eq!(parked.translate, TextTranslate::Pixels { x: -580.0, y: 0.0 });
}

#[test]
fn percentage_kinds_lock_sweep_axis_only() {
    let left = compose_text(&slide(AnimationKind::SlideLeft), &half_frame(), 0.0);
    assert_eq!(left.position_pct, Vec2::new(50.0, 30.0));
    assert_eq!(left.translate, TextTranslate::Percent { x: 120.0, y: 0.0 });
    assert_eq!(
        left.translate.to_pixels(Size::new(200.0, 40.0)),
        Vec2::new(240.0, 0.0)
    );

    let down = compose_text(&slide(AnimationKind::SlideDown), &half_frame(), 0.0);
    assert_eq!(down.position_pct, Vec2::new(20.0, 50.0));

    let zoom = compose_text(&slide(AnimationKind::ZoomIn), &half_frame(), 0.0);
    assert_eq!(zoom.position_pct, Vec2::new(20.0, 30.0));
    assert_eq!(zoom.state.scale, 0.3);
}

#[test]
fn zoom_kinds_leave_text_unscaled() {
    let frame = half_frame();
    let text_size = frame.text_size;
    for kind in [AnimationKind::ZoomIn, AnimationKind::ZoomOut] {
        for t in [0.0, 2.5, 5.0, 10.0] {
            let s = compose_text(&slide(kind), &frame, t);
            let bounds = s
                .affine(text_size)
                .transform_rect_bbox(kurbo::Rect::from_center_size(Point::ZERO, text_size));
            assert!(approx(bounds.width(), text_size.width), "{kind} t={t}");
            assert!(approx(bounds.height(), text_size.height), "{kind} t={t}");
            assert_eq!(s.css_transform(), "translate(-50%, -50%) translate(0%, 0%)");
        }
    }
}

#[test]
fn fade_drives_opacity() {
    let s = Slide {
        text_fade_in_duration: Some(2.0),
        text_fade_out_duration: Some(2.0),
        ..slide(AnimationKind::FadeInOut)
    };
    let f = half_frame();
    assert_eq!(compose_text(&s, &f, 0.0).opacity, 0.0);
    assert_eq!(compose_text(&s, &f, 1.0).opacity, 0.5);
    assert_eq!(compose_text(&s, &f, 5.0).opacity, 1.0);
    assert_eq!(compose_text(&s, &f, 10.0).opacity, 0.0);
}

#[test]
fn screen_offset_shifts_anchor() {
    let frame = TextFrame {
        screen_offset: Vec2::new(100.0, 50.0),
        ..half_frame()
    };
    let s = compose_text(&slide(AnimationKind::None), &frame, 0.0);
    assert!(approx(s.anchor.x, 292.0));
    assert!(approx(s.anchor.y, 212.0));
}

#[test]
fn affine_places_box_center() {
    let s = compose_text(&slide(AnimationKind::SlideLeft), &half_frame(), 0.0);
    let center = s.affine(Size::new(200.0, 40.0)) * Point::ZERO;
    assert!(approx(center.x, 480.0 + 240.0));
    assert!(approx(center.y, 162.0));
    assert_eq!(
        s.css_transform(),
        "translate(-50%, -50%) translate(120%, 0%)"
    );
}

#[test]
fn missing_resolution_uses_screen_size() {
    let s = Slide {
        resolution_width: None,
        resolution_height: None,
        font_size: Some(40.0),
        ..slide(AnimationKind::None)
    };
    let out = compose_text(&s, &half_frame(), 0.0);
    assert_eq!(out.resolution.scale_x, 1.0);
    assert_eq!(out.font_size_px, 40.0);
}
