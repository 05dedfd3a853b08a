use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use slidemotion::{
    AnimationConfig, AnimationKind, Size, Slide, TextFrame, TimelineClock, calculate_state,
    compose_media, compose_text, parse_size, phase_at,
};

#[derive(Parser, Debug)]
#[command(name = "slidemotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample one animation config at the given times.
    State(StateArgs),
    /// Print the config assigned when an operator picks a kind.
    Defaults(DefaultsArgs),
    /// Compose a slide's media and text layers along its timeline.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct StateArgs {
    /// Animation kind (e.g. `fade-in-out`, `slide-right`, `zoom-in`).
    #[arg(long)]
    kind: AnimationKind,

    /// Cycle length in seconds.
    #[arg(long)]
    duration: f64,

    /// Delay before the first cycle, in seconds.
    #[arg(long, default_value_t = 0.0)]
    delay: f64,

    /// Number of cycles; 0 repeats forever.
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Pause between cycles, in seconds.
    #[arg(long, default_value_t = 0.0)]
    gap: f64,

    /// Fade-in window for `fade-in-out`, in seconds.
    #[arg(long)]
    fade_in: Option<f64>,

    /// Fade-out window for `fade-in-out`, in seconds.
    #[arg(long)]
    fade_out: Option<f64>,

    /// Times to sample, in seconds.
    #[arg(long = "at", required = true, num_args = 1.., allow_negative_numbers = true)]
    times: Vec<f64>,
}

#[derive(Parser, Debug)]
struct DefaultsArgs {
    /// Animation kind.
    #[arg(long)]
    kind: AnimationKind,

    /// Slide duration in seconds.
    #[arg(long)]
    slide_duration: f64,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input slide JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Display surface size, e.g. `1280x720`.
    #[arg(long, value_parser = parse_size)]
    screen: Size,

    /// Natural media size; defaults to the screen size.
    #[arg(long, value_parser = parse_size)]
    media: Option<Size>,

    /// Measured text box size in screen pixels.
    #[arg(long, value_parser = parse_size, default_value = "0x0")]
    text_size: Size,

    /// Sample a single time instead of the whole timeline.
    #[arg(long)]
    at: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::State(args) => cmd_state(args),
        Command::Defaults(args) => cmd_defaults(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_slide_json(path: &Path) -> anyhow::Result<Slide> {
    let f = File::open(path).with_context(|| format!("open slide '{}'", path.display()))?;
    let slide = Slide::from_json_reader(BufReader::new(f))
        .with_context(|| format!("load slide '{}'", path.display()))?;
    Ok(slide)
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let config = AnimationConfig {
        kind: args.kind,
        duration: args.duration,
        delay: args.delay,
        repeat: args.repeat,
        gap: args.gap,
        fade_in_duration: args.fade_in,
        fade_out_duration: args.fade_out,
    };

    let mut out = std::io::stdout().lock();
    for t in args.times {
        let line = serde_json::json!({
            "time": t,
            "phase": phase_at(&config, t),
            "state": calculate_state(&config, t),
        });
        writeln!(out, "{line}").context("write state")?;
    }
    Ok(())
}

fn cmd_defaults(args: DefaultsArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.slide_duration.is_finite() && args.slide_duration > 0.0,
        "slide duration must be finite and > 0"
    );
    let config = AnimationConfig::for_slide(args.kind, args.slide_duration);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let slide = read_slide_json(&args.in_path)?;
    let media = args.media.unwrap_or(args.screen);
    let frame = TextFrame::new(args.screen, args.text_size);

    let times: Vec<f64> = match args.at {
        Some(t) => vec![t],
        None => TimelineClock::new(slide.duration)?.sample_times().collect(),
    };

    let mut out = std::io::stdout().lock();
    for t in times {
        let line = serde_json::json!({
            "time": t,
            "media": compose_media(&slide, args.screen, media, t),
            "text": compose_text(&slide, &frame, t),
        });
        writeln!(out, "{line}").context("write sample")?;
    }
    eprintln!("sampled slide '{}'", slide.id);
    Ok(())
}
