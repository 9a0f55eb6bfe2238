//! gf-replay — feed a drive through the geofence engine.
//!
//! A producer thread plays the role of the location provider and publishes
//! readings into the fix channel; the main thread runs the pipeline with an
//! alert board (and, with `--out`, a CSV alert log) as the sink.
//!
//! ```text
//! RUST_LOG=info gf-replay --points points.json --fixes drive.csv --out ./out
//! RUST_LOG=debug gf-replay --speed-limit 15 --sim-speed 40
//! ```

mod cli;
mod track;

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gf_core::{Coordinate, PoiCategory, RawFix};
use gf_output::{AlertBoard, AlertLogSink, CsvAlertWriter};
use gf_pipeline::{AlertSink, EngineConfig, FixPublisher, Pipeline, PipelineBuilder, PipelineStats, fix_channel};
use gf_proximity::{CsvPointsFile, JsonPointsFile, PointOfInterest, PointsSource, StaticPoints};

use cli::Opts;
use track::{DriveParams, load_fixes_csv, simulate_drive};

/// Longest pause between fixes in `--realtime` mode.
const MAX_REALTIME_GAP: Duration = Duration::from_secs(5);

// ── Built-in points ───────────────────────────────────────────────────────────

fn builtin_points() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new("Lipton Camera-2", PoiCategory::Camera, Coordinate::new(30.8600959, 75.8610409)),
        PointOfInterest::new("Lipton Speed Breaker", PoiCategory::SpeedBreaker, Coordinate::new(30.8611500, 75.8618200)),
        PointOfInterest::new("Ferozepur Road Camera-1", PoiCategory::Camera, Coordinate::new(30.8624700, 75.8630100)),
    ]
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Defaults, then the config file, then command-line overrides.
fn engine_config(opts: &Opts) -> Result<EngineConfig> {
    let mut config = match &opts.config {
        Some(path) => EngineConfig::load_json(path)
            .with_context(|| format!("loading engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(r) = opts.radius {
        config.radius_m = r;
    }
    if let Some(v) = opts.speed_limit {
        config.speed_limit_kmh = v;
    }
    Ok(config)
}

fn points_source(path: Option<&Path>) -> Box<dyn PointsSource> {
    match path {
        None => Box::new(StaticPoints(builtin_points())),
        Some(p) if p.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv")) => {
            Box::new(CsvPointsFile::new(p))
        }
        Some(p) => Box::new(JsonPointsFile::new(p)),
    }
}

// ── Producer ──────────────────────────────────────────────────────────────────

/// How long to wait for a timestamp gap of `gap_secs`, capped at
/// [`MAX_REALTIME_GAP`].  `None` for zero, negative, or non-finite gaps.
fn realtime_pause(gap_secs: f64) -> Option<Duration> {
    if !gap_secs.is_finite() || gap_secs <= 0.0 {
        return None;
    }
    // Clamp before converting: `Duration` cannot hold arbitrary f64 seconds.
    Some(Duration::from_secs_f64(gap_secs.min(MAX_REALTIME_GAP.as_secs_f64())))
}

fn publish_all(publisher: FixPublisher, fixes: Vec<RawFix>, realtime: bool) {
    let mut last_secs: Option<f64> = None;
    for fix in fixes {
        if realtime {
            if let Some(pause) = last_secs.and_then(|prev| realtime_pause(fix.timestamp_secs - prev)) {
                thread::sleep(pause);
            }
            last_secs = Some(fix.timestamp_secs);
        }
        if publisher.publish(fix).is_err() {
            warn!("consumer stopped; dropping remaining fixes");
            return;
        }
    }
}

fn replay<S: AlertSink>(pipeline: &mut Pipeline, fixes: Vec<RawFix>, realtime: bool, sink: S) -> Result<PipelineStats> {
    let (publisher, subscription) = fix_channel();
    let producer = thread::Builder::new()
        .name("location-provider".into())
        .spawn(move || publish_all(publisher, fixes, realtime))
        .context("spawning producer thread")?;

    let stats = pipeline.run(subscription, sink);
    producer
        .join()
        .map_err(|_| anyhow::anyhow!("producer thread panicked"))?;
    Ok(stats)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logging();

    let config = engine_config(&opts)?;
    let source = points_source(opts.points.as_deref());
    let mut pipeline = PipelineBuilder::new(config)
        .points_from(source.as_ref())
        .build()
        .context("building pipeline")?;

    let fixes = match &opts.fixes {
        Some(path) => load_fixes_csv(path)?,
        None => {
            let params = DriveParams { speed_kmh: opts.sim_speed, jitter_m: opts.jitter, seed: opts.seed };
            let fixes = simulate_drive(pipeline.points(), &params);
            info!(fixes = fixes.len(), speed_kmh = opts.sim_speed, seed = opts.seed, "simulated drive");
            fixes
        }
    };

    let t0 = Instant::now();
    let mut board = AlertBoard::new(opts.display_secs);

    let stats = match &opts.out {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvAlertWriter::new(dir)
                .with_context(|| format!("opening alert log in {}", dir.display()))?;
            let mut log = AlertLogSink::new(writer);
            let stats = replay(&mut pipeline, fixes, opts.realtime, (&mut log, &mut board))?;
            if let Some(e) = log.take_error() {
                return Err(anyhow::Error::new(e).context("writing alert log"));
            }
            stats
        }
        None => replay(&mut pipeline, fixes, opts.realtime, &mut board)?,
    };

    println!("fixes received   : {}", stats.fixes_received);
    println!("fixes rejected   : {}", stats.fixes_rejected);
    println!("proximity alerts : {}", stats.proximity_alerts);
    println!("speed warnings   : {}", stats.speed_warnings);
    println!("notifications    : {}", board.notifications());
    println!("elapsed          : {:.2?}", t0.elapsed());
    if let Some(dir) = &opts.out {
        println!("alert log        : {}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_follows_timestamp_gap() {
        assert_eq!(realtime_pause(0.5), Some(Duration::from_millis(500)));
        assert_eq!(realtime_pause(MAX_REALTIME_GAP.as_secs_f64()), Some(MAX_REALTIME_GAP));
    }

    #[test]
    fn huge_gap_is_capped() {
        assert_eq!(realtime_pause(1e20), Some(MAX_REALTIME_GAP));
        assert_eq!(realtime_pause(f64::MAX), Some(MAX_REALTIME_GAP));
    }

    #[test]
    fn no_pause_for_duplicate_backwards_or_garbage_gaps() {
        assert_eq!(realtime_pause(0.0), None);
        assert_eq!(realtime_pause(-3.0), None);
        assert_eq!(realtime_pause(f64::NAN), None);
        assert_eq!(realtime_pause(f64::INFINITY), None);
    }

    #[test]
    fn realtime_publish_delivers_every_fix() {
        let (publisher, subscription) = fix_channel();
        let fixes = vec![
            RawFix::new(30.0, 75.0, 0.0),
            RawFix::new(30.0, 75.0, f64::NAN),
            RawFix::new(30.0, 75.0, 0.01),
        ];
        publish_all(publisher, fixes, true);
        assert_eq!(subscription.count(), 3);
    }
}
