use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use perspective::{
    ErrorClassifier, EventFilter, TimeRange, VisualizerConfig, VisualizerKind,
    convert_csv_to_binary, create_visualizer, generate_png_from_bin_log,
};

#[derive(Parser, Debug)]
#[command(name = "perspective", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a CSV event export into a binary event log.
    CsvConvert(ConvertArgs),
    /// Render a binary event log as a PNG.
    Vis(VisArgs),
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Least recent start time to keep, in seconds since the Unix epoch.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    min_time: i32,

    /// Most recent start time to keep (defaults to now).
    #[arg(long, allow_negative_numbers = true)]
    max_time: Option<i32>,

    /// Keep only this event type.
    #[arg(long)]
    event_type_id: Option<u8>,

    /// Keep only this region.
    #[arg(long)]
    region: Option<u8>,

    /// Keep only this exit status.
    #[arg(long, allow_negative_numbers = true)]
    status: Option<i8>,
}

impl FilterArgs {
    fn max_time(&self) -> i32 {
        self.max_time.unwrap_or_else(now_unix)
    }

    fn filter(&self, time: TimeRange) -> EventFilter {
        EventFilter::new(time)
            .with_event_type(self.event_type_id)
            .with_region(self.region)
            .with_status(self.status)
    }
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input CSV path.
    input: PathBuf,

    /// Output binary log path.
    output: PathBuf,

    /// Pipe-delimited file of error-reason patterns, one per row.
    #[arg(long)]
    error_reason_filter: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Parser, Debug)]
struct VisArgs {
    /// Visualization to render.
    #[arg(value_enum)]
    kind: KindChoice,

    /// Input binary log path.
    input: PathBuf,

    /// Output PNG path.
    output: PathBuf,

    /// Image width in pixels.
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 128)]
    height: u32,

    /// Pixels per doubling of run time.
    #[arg(long, default_value_t = 16.0)]
    run_time_scale: f64,

    /// Color steps before a pixel saturates.
    #[arg(long, default_value_t = 1)]
    color_steps: u32,

    /// Vertical grid divisions (0 for none).
    #[arg(long, default_value_t = 0)]
    x_grid: u32,

    /// JSON renderer config; replaces the geometry and time flags.
    #[arg(
        long,
        conflicts_with_all = [
            "width",
            "height",
            "min_time",
            "max_time",
            "run_time_scale",
            "color_steps",
            "x_grid",
        ]
    )]
    config: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Wave,
    WaveSorted,
    RollingStack,
    Sweep,
    Scatter,
    Histogram,
    ErrorStack,
    StatusStack,
}

impl From<KindChoice> for VisualizerKind {
    fn from(k: KindChoice) -> Self {
        match k {
            KindChoice::Wave => VisualizerKind::Wave,
            KindChoice::WaveSorted => VisualizerKind::SortedWave,
            KindChoice::RollingStack => VisualizerKind::RollingStack,
            KindChoice::Sweep => VisualizerKind::Sweep,
            KindChoice::Scatter => VisualizerKind::Scatter,
            KindChoice::Histogram => VisualizerKind::Histogram,
            KindChoice::ErrorStack => VisualizerKind::ErrorStack,
            KindChoice::StatusStack => VisualizerKind::StatusStack,
        }
    }
}

/// Current wall-clock time in epoch seconds, clamped into the `i32` range of the log format.
fn now_unix() -> i32 {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    i32::try_from(secs).unwrap_or(i32::MAX)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::CsvConvert(args) => cmd_convert(args),
        Command::Vis(args) => cmd_vis(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let classifier = match &args.error_reason_filter {
        Some(path) => ErrorClassifier::from_config_file(path)?,
        None => ErrorClassifier::new()?,
    };
    let time = TimeRange::new(args.filter.min_time, args.filter.max_time())?;
    let stats = convert_csv_to_binary(
        &args.input,
        &args.output,
        &args.filter.filter(time),
        &classifier,
    )
    .with_context(|| format!("convert '{}'", args.input.display()))?;

    eprintln!(
        "wrote {} ({} of {} rows)",
        args.output.display(),
        stats.rows_written,
        stats.rows_read
    );
    Ok(())
}

fn cmd_vis(args: VisArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            VisualizerConfig::from_json(&json)?
        }
        None => VisualizerConfig {
            width: args.width,
            height: args.height,
            min_time: args.filter.min_time,
            max_time: args.filter.max_time(),
            run_time_scale: args.run_time_scale,
            color_steps: args.color_steps,
            x_grid: args.x_grid,
        },
    };
    let kind = VisualizerKind::from(args.kind);
    let visualizer = create_visualizer(kind, &cfg)?;
    let filter = args.filter.filter(cfg.time_range()?);

    let stats = generate_png_from_bin_log(&args.input, &args.output, &filter, visualizer)
        .with_context(|| format!("render {kind} from '{}'", args.input.display()))?;

    eprintln!(
        "wrote {} ({} events)",
        args.output.display(),
        stats.events_recorded
    );
    Ok(())
}
