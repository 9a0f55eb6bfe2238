use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "gf-replay", version, about = "Replay a drive through the geofence engine.")]
pub struct Opts {
    /// Points of interest (`.json` array or `name,type,lat,lng` CSV).
    /// Without it a small built-in set around Ludhiana is used.
    #[arg(short = 'p', long)]
    pub points: Option<PathBuf>,

    /// Recorded fixes as `lat,lon,timestamp_secs` CSV.  Without it a drive
    /// past every point is simulated.
    #[arg(short = 'f', long)]
    pub fixes: Option<PathBuf>,

    /// Engine configuration JSON (`radius_m`, `speed_limit_kmh`, `earth_radius_m`).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Override the geofence radius in metres.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Override the speed limit in km/h.
    #[arg(long)]
    pub speed_limit: Option<f64>,

    /// Directory for `alerts.csv` and `speed_trace.csv`.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Seconds an alert stays on the board without a refresh.
    #[arg(long, default_value_t = gf_output::DEFAULT_DISPLAY_SECS)]
    pub display_secs: f64,

    /// Simulated cruising speed in km/h.
    #[arg(long, default_value_t = 30.0)]
    pub sim_speed: f64,

    /// Simulated GPS jitter in metres.
    #[arg(long, default_value_t = 2.0)]
    pub jitter: f64,

    /// RNG seed for the simulated drive.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Sleep between fixes according to their timestamps.
    #[arg(long)]
    pub realtime: bool,
}
