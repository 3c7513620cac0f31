use anyhow::Context;
use astrowheel::ephemeris::FixedEphemeris;
use astrowheel::{ChartContext, ChartRequest, RenderedChart};
use astrowheel_config::{load_wheel_settings, WheelSettings};
use chrono::Utc;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Render a zodiac wheel with aspect chords for one instant.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Settings file (defaults to configs/wheel.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    month: Option<u32>,
    #[arg(long)]
    day: Option<u32>,
    #[arg(long)]
    hour: Option<u32>,
    #[arg(long)]
    minute: Option<u32>,

    /// JSON request body ({"year":..,"month":..,"day":..,"hour":..,"minute":..}).
    /// Flags given on the command line override its fields.
    #[arg(long)]
    request: Option<PathBuf>,

    #[arg(long, help = "JSON array of body positions to draw instead of querying Swiss Ephemeris")]
    positions: Option<PathBuf>,

    #[arg(long, default_value = "chart.png")]
    out: PathBuf,

    /// Also write the laid-out chart shapes as JSON
    #[arg(long)]
    spec_json: Option<PathBuf>,
}

impl Args {
    fn chart_request(&self) -> anyhow::Result<ChartRequest> {
        let base = match &self.request {
            Some(path) => {
                let json = read_text(path)?;
                ChartRequest::from_json(&json)?
            }
            None => ChartRequest::now(),
        };
        Ok(ChartRequest {
            year: self.year.or(base.year),
            month: self.month.or(base.month),
            day: self.day.or(base.day),
            hour: self.hour.or(base.hour),
            minute: self.minute.or(base.minute),
        })
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn render(args: &Args, settings: &WheelSettings) -> anyhow::Result<RenderedChart> {
    let request = args.chart_request()?;
    let now = Utc::now();

    let chart = match &args.positions {
        Some(path) => {
            let json = read_text(path)?;
            let provider = FixedEphemeris::from_json(
                &json,
                settings.ephemeris.valid_from..=settings.ephemeris.valid_until,
            )
            .with_context(|| format!("Invalid position table {}", path.display()))?;
            ChartContext::from_settings(settings, provider)?.chart_for(&request, now)?
        }
        None => ChartContext::with_swiss_ephemeris(settings)?.chart_for(&request, now)?,
    };
    Ok(chart)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = load_wheel_settings(args.config.as_deref())?;
    let chart = render(&args, &settings)?;

    fs::write(&args.out, &chart.png)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    log::info!("Wrote {}", args.out.display());

    if let Some(path) = &args.spec_json {
        let json = serde_json::to_string_pretty(&chart.spec)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote chart spec to {}", path.display());
    }

    println!("Chart for {}", chart.instant.format("%Y-%m-%d %H:%M UTC"));
    for edge in &chart.aspects.edges {
        println!("  {} {} {}", edge.body_a, edge.aspect_kind, edge.body_b);
    }
    Ok(())
}
