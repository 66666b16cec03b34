use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use hypocycloid::{
    Ease, Hypocycloid, MotionFrame, Point, SampleOpts, Sweep, SweepConfig, path_svg, polyline,
    sample_points,
};

#[derive(Parser, Debug)]
#[command(name = "hypocycloid", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the rolling centre and traced point at one progress value.
    Point(PointArgs),
    /// Sample the full curve as a polyline.
    Sample(SampleArgs),
    /// Evaluate every frame of a ratio sweep as JSON lines.
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
struct CurveArgs {
    /// Ratio of fixed radius to rolling radius.
    #[arg(long, short = 'n')]
    ratio: f64,

    /// Fixed circle radius.
    #[arg(long, default_value_t = hypocycloid::REFERENCE_FIXED_RADIUS)]
    radius: f64,

    /// Fixed circle centre as `X,Y`.
    #[arg(long, value_parser = parse_point, default_value = "0,0", allow_hyphen_values = true)]
    origin: Point,

    #[command(flatten)]
    ease: EaseArgs,
}

#[derive(Args, Debug)]
struct EaseArgs {
    /// Easing applied to progress.
    #[arg(long, value_enum, default_value_t = EaseChoice::Smooth)]
    ease: EaseChoice,

    /// Logistic steepness for `--ease smooth`.
    #[arg(long, default_value_t = hypocycloid::REFERENCE_INFLECTION)]
    inflection: f64,

    /// Polynomial order for `--ease smooth-step`.
    #[arg(long, default_value_t = 7)]
    order: u32,
}

#[derive(Parser, Debug)]
struct PointArgs {
    #[command(flatten)]
    curve: CurveArgs,

    /// Progress in `[0, 1]`.
    #[arg(long)]
    t: f64,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    curve: CurveArgs,

    /// Number of samples, endpoints included.
    #[arg(long, default_value_t = 256)]
    samples: usize,

    /// Sample on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Emit SVG path data instead of a JSON point list.
    #[arg(long)]
    svg: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Sweep config JSON; the built-in sweep (ratios 2 to 6) when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Attach the curve traced so far to every frame, sampled with this many points.
    #[arg(long)]
    trace_samples: Option<usize>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    Smooth,
    SmoothStep,
}

impl EaseArgs {
    fn resolve(&self) -> anyhow::Result<Ease> {
        let ease = match self.ease {
            EaseChoice::Linear => Ease::Linear,
            EaseChoice::InQuad => Ease::InQuad,
            EaseChoice::OutQuad => Ease::OutQuad,
            EaseChoice::InOutQuad => Ease::InOutQuad,
            EaseChoice::InCubic => Ease::InCubic,
            EaseChoice::OutCubic => Ease::OutCubic,
            EaseChoice::InOutCubic => Ease::InOutCubic,
            EaseChoice::Smooth => Ease::Smooth {
                inflection: self.inflection,
            },
            EaseChoice::SmoothStep => Ease::SmoothStep { order: self.order },
        };
        ease.validate()?;
        Ok(ease)
    }
}

impl CurveArgs {
    fn build(&self) -> anyhow::Result<(Hypocycloid, Ease)> {
        let curve = Hypocycloid::with_radius(self.origin, self.radius, self.ratio)?;
        Ok((curve, self.ease.resolve()?))
    }
}

#[derive(serde::Serialize)]
struct PointReport {
    ratio: f64,
    t: f64,
    eased_t: f64,
    rolling_center: Point,
    rolling_radius: f64,
    traced_point: Point,
}

#[derive(serde::Serialize)]
struct FrameLine<'a> {
    #[serde(flatten)]
    state: &'a MotionFrame,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Point(args) => cmd_point(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    let Some(path) = out else {
        return Ok(Box::new(BufWriter::new(std::io::stdout().lock())));
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(Box::new(BufWriter::new(f)))
}

fn cmd_point(args: PointArgs) -> anyhow::Result<()> {
    let (curve, ease) = args.curve.build()?;
    let report = PointReport {
        ratio: curve.ratio(),
        t: args.t,
        eased_t: ease.apply(args.t),
        rolling_center: curve.rolling_circle().position(args.t, &ease),
        rolling_radius: curve.rolling_radius(),
        traced_point: curve.point(args.t, &ease),
    };

    let mut w = open_output(None)?;
    serde_json::to_writer_pretty(&mut w, &report).context("encode point report")?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let (curve, ease) = args.curve.build()?;
    let opts = SampleOpts {
        samples: args.samples,
        parallel: args.parallel,
        threads: args.threads,
    };
    let points = sample_points(&curve, &opts, &ease)?;

    let mut w = open_output(args.out.as_deref())?;
    if args.svg {
        writeln!(w, "{}", path_svg(&polyline(&points)))?;
    } else {
        serde_json::to_writer(&mut w, &points).context("encode sample points")?;
        writeln!(w)?;
    }
    w.flush()?;

    if let Some(out) = &args.out {
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => SweepConfig::from_path(path)?,
        None => SweepConfig::default(),
    };
    let sweep = Sweep::new(config)?;
    let trace_opts = args.trace_samples.map(|samples| SampleOpts {
        samples,
        ..SampleOpts::default()
    });

    let mut w = open_output(args.out.as_deref())?;
    for state in sweep.eval_all()? {
        let trace = match &trace_opts {
            Some(opts) => Some(path_svg(&sweep.trace_at(state.frame, opts)?)),
            None => None,
        };
        let line = FrameLine {
            state: &state,
            trace,
        };
        serde_json::to_writer(&mut w, &line)
            .with_context(|| format!("encode frame {}", state.frame.0))?;
        writeln!(w)?;
    }
    w.flush()?;

    if let Some(out) = &args.out {
        eprintln!("wrote {} frames to {}", sweep.duration().0, out.display());
    }
    Ok(())
}
