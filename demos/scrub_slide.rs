use slidemotion::{
    Size, Slide, TextFrame, TimelineClock, compose_media, compose_text, format_duration_seconds,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/promo_slide.json");
    let slide = Slide::from_json_str(s)?;

    let screen = Size::new(1280.0, 720.0);
    let frame = TextFrame::new(screen, Size::new(180.0, 40.0));
    let mut clock = TimelineClock::new(slide.duration)?;

    for t in [0.0, 1.0, 2.5, 4.0, 5.0, 6.5, 9.0, 10.0] {
        let t = clock.seek(t);
        let media = compose_media(&slide, screen, Size::new(1920.0, 1080.0), t);
        let text = compose_text(&slide, &frame, t);
        println!(
            "{} media: {} | text: {} opacity={:.2}",
            format_duration_seconds(t),
            media.css_transform(),
            text.css_transform(),
            text.opacity
        );
    }

    Ok(())
}
