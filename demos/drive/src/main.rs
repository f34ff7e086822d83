//! drive — replays a synthetic drive through the turn-by-turn session.
//!
//! Loads a route (the embedded Cupertino loop, or a CSV given on the command
//! line), simulates a jittered GPS track along it, and prints every spoken
//! announcement.  Set `RUST_LOG=debug` to watch the tracker's transitions.
//!
//! ```text
//! cargo run -p drive -- [config.json] [route.csv] [destination name]
//! ```
//!
//! `config.json` holds a `TrackerConfig`, e.g.
//! `{"default_radius_m": 20.0, "policy": "next_step_only"}`.

mod path;

use std::io::{Cursor, Read};
use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tbt_core::TrackerConfig;
use tbt_route::{Destination, Route, StaticPlanner, load_route_csv, load_route_reader};
use tbt_session::{SessionBuilder, SpeechSink};
use tbt_tracker::{AnnouncementEvent, Geofence};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 7;
const SAMPLE_SPACING_M: f64 = 5.0;
const GPS_JITTER_M:     f64 = 3.0;

const ROUTE_CSV: &str = include_str!("route.csv");

const DEFAULT_DESTINATION: &str = "your destination";

// ── Speech output ─────────────────────────────────────────────────────────────

/// Prints each announcement with the fix number it was triggered by.
struct ConsoleSpeech {
    fix:    usize,
    spoken: usize,
}

impl SpeechSink for ConsoleSpeech {
    fn speak(&mut self, text: &str, event: &AnnouncementEvent) {
        self.spoken += 1;
        println!("[fix {:>4}] step {:>2}: {text}", self.fix, event.step().0);
    }

    fn stop(&mut self) {
        println!("[fix {:>4}] (speech interrupted)", self.fix);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.first() {
        Some(p) => load_config(Path::new(p))?,
        None    => TrackerConfig::default(),
    };
    let route = match args.get(1) {
        Some(p) => load_route_csv(Path::new(p), config.default_radius_m)
            .with_context(|| format!("loading route from {p}"))?,
        None => load_route_reader(Cursor::new(ROUTE_CSV), config.default_radius_m)
            .context("loading embedded route")?,
    };
    let name        = args.get(2).map_or(DEFAULT_DESTINATION, String::as_str);
    let destination = destination_of(&route, name)?;
    info!(steps = route.len(), distance_m = route.total_distance_m(), "route loaded");

    let mut rng   = SmallRng::seed_from_u64(SEED);
    let track     = path::jitter(&path::sample_anchors(&route, SAMPLE_SPACING_M), &mut rng, GPS_JITTER_M);
    let first_fix = *track.first().context("route produced an empty track")?;

    let mut session = SessionBuilder::new(
        StaticPlanner::new(route),
        Geofence::new(),
        ConsoleSpeech { fix: 0, spoken: 0 },
    )
    .config(config)
    .build()?;

    session.on_location(first_fix);
    session.begin_search();
    session.request_directions(destination)?;

    for (i, fix) in track.iter().enumerate() {
        session.speech.fix = i;
        session.on_location(*fix);
        if !session.is_navigating() {
            break;
        }
    }

    info!(
        fixes     = track.len(),
        spoken    = session.speech.spoken,
        navigating = session.is_navigating(),
        "drive finished"
    );
    if session.is_navigating() {
        let step = session.tracker().current_step().map(|s| s.instruction.clone()).unwrap_or_default();
        session.cancel();
        anyhow::bail!("track ended before arrival; stuck at {step:?}");
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<TrackerConfig> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening config {}", path.display()))?;
    parse_config(file).with_context(|| format!("parsing config {}", path.display()))
}

/// Parse a JSON `TrackerConfig`; missing fields take their defaults.
fn parse_config<R: Read>(reader: R) -> Result<TrackerConfig> {
    let config: TrackerConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// The destination is wherever the last step is anchored.
fn destination_of(route: &Route, name: &str) -> Result<Destination> {
    let last = route.steps().last().context("route has no steps")?;
    Ok(Destination::new(name, last.anchor))
}
