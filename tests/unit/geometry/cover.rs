use super::*;

fn transform(sx: f64, sy: f64, ox: f64, oy: f64) -> MediaTransform {
    MediaTransform {
        scale: Vec2::new(sx, sy),
        offset_pct: Vec2::new(ox, oy),
    }
}

#[test]
fn matching_sizes_fit_exactly() {
    let container = Size::new(1920.0, 1080.0);
    let g = MediaGeometry::resolve(MediaTransform::default(), container, container);
    assert_eq!(g.base, container);
    assert_eq!(g.actual, container);
    assert_eq!(g.offset, Vec2::ZERO);
}

#[test]
fn same_aspect_scales_up_exactly() {
    let g = MediaGeometry::resolve(
        MediaTransform::default(),
        Size::new(1920.0, 1080.0),
        Size::new(1280.0, 720.0),
    );
    assert_eq!(g.actual, Size::new(1920.0, 1080.0));
}

#[test]
fn cover_crops_the_longer_axis() {
    // square media into a wide container: width decides, height overflows
    let g = MediaGeometry::resolve(
        MediaTransform::default(),
        Size::new(400.0, 200.0),
        Size::new(100.0, 100.0),
    );
    assert_eq!(g.base, Size::new(400.0, 400.0));

    // tall container: height decides
    let g = MediaGeometry::resolve(
        MediaTransform::default(),
        Size::new(100.0, 300.0),
        Size::new(200.0, 100.0),
    );
    assert_eq!(g.base, Size::new(600.0, 300.0));
}

#[test]
fn user_scale_and_offset_apply_after_fit() {
    let g = MediaGeometry::resolve(
        transform(1.5, 0.5, 10.0, -25.0),
        Size::new(800.0, 400.0),
        Size::new(800.0, 400.0),
    );
    assert_eq!(g.base, Size::new(800.0, 400.0));
    assert_eq!(g.actual, Size::new(1200.0, 200.0));
    assert_eq!(g.offset, Vec2::new(80.0, -100.0));
    assert_eq!(g.scale, Vec2::new(1.5, 0.5));
}

#[test]
fn zero_media_size_fills_container() {
    let container = Size::new(640.0, 360.0);
    let g = MediaGeometry::resolve(MediaTransform::default(), container, Size::ZERO);
    assert_eq!(g.base, container);
    assert!(g.actual.width.is_finite() && g.actual.height.is_finite());

    // one zero axis: the other keeps its natural size
    let g = MediaGeometry::resolve(MediaTransform::default(), container, Size::new(100.0, 0.0));
    assert_eq!(g.base, Size::new(100.0, 360.0));
}
