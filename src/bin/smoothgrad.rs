use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "smoothgrad", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a gradient as a PNG.
    Render(RenderArgs),
    /// Print the blended color at one position along the axis.
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
struct GradientArgs {
    /// Gradient configuration JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the curve slope factor (must be > 0).
    #[arg(long)]
    slope: Option<f64>,

    /// Override the slope factor with a logarithmic slider position (`k = ln(v)`).
    #[arg(long, conflicts_with = "slope")]
    slope_log: Option<f64>,

    /// Swap start and end colors.
    #[arg(long)]
    mirror: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    gradient: GradientArgs,

    /// Output width in pixels.
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Background color (hex) painted before the gradient.
    #[arg(long)]
    background: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    gradient: GradientArgs,

    /// Normalized position along the axis.
    #[arg(long, allow_hyphen_values = true)]
    t: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_config_json(path: &Path) -> anyhow::Result<smoothgrad::GradientConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = smoothgrad::GradientConfig::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(cfg)
}

fn build_spec(args: &GradientArgs) -> anyhow::Result<smoothgrad::GradientSpec> {
    let mut cfg = match &args.config {
        Some(path) => read_config_json(path)?,
        None => smoothgrad::GradientConfig::default(),
    };
    if let Some(k) = args.slope {
        cfg.slope_factor = k;
    }
    if let Some(v) = args.slope_log {
        cfg.slope_factor = smoothgrad::SlopeFactor::from_log_scale(v)?.get();
    }
    if args.mirror {
        cfg.mirror = !cfg.mirror;
    }
    Ok(smoothgrad::GradientSpec::from_config(&cfg)?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let spec = build_spec(&args.gradient)?;

    let clear = args
        .background
        .as_deref()
        .map(smoothgrad::Color::from_hex)
        .transpose()
        .context("parse --background")?;
    let renderer = smoothgrad::AxialRenderer::new(smoothgrad::RenderSettings { clear });

    let canvas = smoothgrad::Canvas {
        width: args.width,
        height: args.height,
    };
    let (buf, stats) = renderer.render_pixels(&spec, canvas)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    buf.save_png(&args.out)?;

    if stats.degenerate {
        eprintln!("note: start and end points coincide, filled with end color");
    }
    eprintln!(
        "wrote {} ({} painted, {} skipped)",
        args.out.display(),
        stats.painted,
        stats.skipped
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let spec = build_spec(&args.gradient)?;
    let k = spec.slope_factor();
    let w = smoothgrad::blend_weight(args.t, k);
    let c = spec.curve().evaluate(args.t).clamped();
    let px = c.to_rgba8();
    println!("t={:.4} slope={:.4} weight={:.6}", args.t, k.get(), w);
    println!(
        "rgba=({:.6}, {:.6}, {:.6}, {:.6}) #{:02x}{:02x}{:02x}{:02x}",
        c.r, c.g, c.b, c.a, px.r, px.g, px.b, px.a
    );
    Ok(())
}
