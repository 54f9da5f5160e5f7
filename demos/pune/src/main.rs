//! `pune` — headless run of the AplaPune signal map.
//!
//! Scatters the demo signals over Pune, then drives the countdown scheduler
//! while a short script plays the part of the user: locate, flip through the
//! overlay modes, ask for the nearest signal, click one, and search.
//!
//! Run with:
//!   cargo run -p pune -- [config.json] [--sites sites.csv] [--ticks N] [--realtime]
//!
//! `RUST_LOG=debug` shows per-tick colour changes and layer reconciliation.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ap_core::{DemoConfig, GeoPoint, SignalId, Tick};
use ap_overlay::{HeadlessMap, MapSurface, OverlayMode};
use ap_services::{FixedLocation, Gazetteer, Route, StraightLineRouter};
use ap_session::{Event, Session, SessionBuilder, SessionObserver};
use ap_signal::{SignalColor, load_sites_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_TICKS: u64 = 30;
/// Where the scripted user is standing (near Shaniwar Wada).
const USER_LAT: f64 = 18.5190;
const USER_LON: f64 = 73.8550;

// ── Command line ──────────────────────────────────────────────────────────────

/// Headless run of the AplaPune signal map.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file overriding the demo configuration.
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,
    /// CSV of fixed signal sites (`lat,lon[,density]`) used instead of random placement.
    #[arg(long, value_name = "PATH")]
    sites: Option<PathBuf>,
    /// Number of one-second ticks to run.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_TICKS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    ticks: u64,
    /// Sleep between ticks instead of running as fast as possible.
    #[arg(long)]
    realtime: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

// ── Scripted user ─────────────────────────────────────────────────────────────

fn script(tick: Tick) -> Vec<Event> {
    match tick.0 {
        1  => vec![Event::LocateRequested],
        4  => vec![Event::ModeSelected(OverlayMode::Density)],
        6  => vec![Event::ModeSelected(OverlayMode::Crowd)],
        8  => vec![Event::ModeSelected(OverlayMode::Signals)],
        10 => vec![Event::NearestRequested],
        14 => vec![Event::SignalClicked(SignalId(1))],
        18 => vec![Event::SearchSubmitted("Shaniwar Wada".into())],
        _  => vec![],
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct LogObserver {
    flips:  usize,
    alerts: usize,
    routes: usize,
}

impl SessionObserver for LogObserver {
    fn on_tick(&mut self, tick: Tick, flipped: &[SignalId]) {
        self.flips += flipped.len();
        if !flipped.is_empty() {
            log::debug!("{tick}: flipped {flipped:?}");
        }
    }

    fn on_status(&mut self, message: &str) {
        log::info!("status: {message}");
    }

    fn on_alert(&mut self, message: &str) {
        self.alerts += 1;
        log::warn!("alert: {message}");
    }

    fn on_route(&mut self, route: &Route) {
        self.routes += 1;
        log::info!(
            "route: {:.0} m, about {:.0} min",
            route.distance_m,
            route.duration_secs / 60.0
        );
    }

    fn on_mode(&mut self, mode: OverlayMode) {
        log::info!("mode: {mode}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

type DemoSession = Session<HeadlessMap, FixedLocation, Gazetteer, StraightLineRouter>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args())
        })
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    let map = HeadlessMap::new(config.initial_center, config.initial_zoom);
    let user = FixedLocation::at(GeoPoint::new(USER_LAT, USER_LON));
    let mut builder = SessionBuilder::new(config, map, user, Gazetteer::pune(), StraightLineRouter::default());
    if let Some(path) = &args.sites {
        let sites = load_sites_csv(path).with_context(|| format!("loading {}", path.display()))?;
        builder = builder.sites(sites);
    }
    let mut session: DemoSession = builder.build()?;

    let mut observer = LogObserver::default();
    let t0 = Instant::now();
    if args.realtime {
        session.run_paced(args.ticks, &mut observer, script);
    } else {
        for t in 0..args.ticks {
            for event in script(Tick(t)) {
                session.push(event);
            }
            session.run_ticks(1, &mut observer);
        }
    }

    summarize(&session, &observer);
    log::info!("done in {:.2?}", t0.elapsed());
    Ok(())
}

fn summarize(session: &DemoSession, observer: &LogObserver) {
    let red = session
        .registry
        .iter()
        .filter(|s| s.color() == SignalColor::Red)
        .count();
    log::info!(
        "{}: {} signals ({} red, {} green), {} colour changes",
        session.clock,
        session.registry.len(),
        red,
        session.registry.len() - red,
        observer.flips,
    );
    log::info!(
        "map: zoom {}, {} of {} layers drawn, mode {}",
        session.map.zoom(),
        session.map.attached_count(),
        session.layers.len(),
        session.mode(),
    );
    match session.nearest_signal() {
        Ok(signal) => log::info!(
            "nearest signal: {} at {} ({}, {}s left)",
            signal.id(),
            signal.position(),
            signal.color(),
            signal.remaining_secs(),
        ),
        Err(e) => log::info!("nearest signal: {}", e.user_message()),
    }
    log::info!("{} route(s) shown, {} alert(s)", observer.routes, observer.alerts);
}
