//! Demo configuration.
//!
//! Every demo constant (bounding box, signal count, countdown span, zoom
//! threshold, hotspots) is a field here rather than a literal in code.
//! `DemoConfig::default()` is the Pune reference setup.  With the
//! `serde` feature the struct loads from partial JSON; missing fields fall
//! back to the defaults.

use std::time::Duration;

use crate::{BoundingBox, CoreError, CoreResult, GeoPoint, SimRng};

// ── CountdownRange ────────────────────────────────────────────────────────────

/// Inclusive range of seconds a signal holds one colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountdownRange {
    pub min_secs: u32,
    pub max_secs: u32,
}

impl CountdownRange {
    pub fn new(min_secs: u32, max_secs: u32) -> Self {
        Self { min_secs, max_secs }
    }

    /// Draw a fresh countdown uniformly in `[min_secs, max_secs]`.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> u32 {
        rng.gen_range(self.min_secs..=self.max_secs)
    }

    #[inline]
    pub fn contains(&self, secs: u32) -> bool {
        (self.min_secs..=self.max_secs).contains(&secs)
    }

    /// A zero minimum would let a freshly drawn countdown sit at 0, which the
    /// registry never exposes.
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_secs == 0 {
            return Err(CoreError::Config("countdown minimum must be at least 1 s".into()));
        }
        if self.min_secs > self.max_secs {
            return Err(CoreError::Config(format!(
                "countdown range {}..={} is inverted",
                self.min_secs, self.max_secs
            )));
        }
        Ok(())
    }
}

impl Default for CountdownRange {
    fn default() -> Self {
        Self::new(10, 20)
    }
}

// ── HotspotConfig ─────────────────────────────────────────────────────────────

/// A named crowd hotspot shown in crowd mode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HotspotConfig {
    pub name: String,
    pub position: GeoPoint,
}

impl HotspotConfig {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { name: name.into(), position: GeoPoint::new(lat, lon) }
    }
}

// ── DemoConfig ────────────────────────────────────────────────────────────────

/// Top-level session configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DemoConfig {
    /// Region random signals are scattered over.
    pub bounds: BoundingBox,

    /// Number of signals created at startup.  Default: 120.
    pub signal_count: usize,

    /// Per-colour hold time.  Default: 10–20 s.
    pub countdown: CountdownRange,

    /// Countdown labels are shown at this zoom and above.  Default: 15.
    pub countdown_zoom_threshold: u8,

    /// Milliseconds between scheduler ticks.  Default: 1000.
    pub tick_interval_ms: u64,

    /// Map view at startup.
    pub initial_center: GeoPoint,
    pub initial_zoom: u8,

    /// Zoom used when focusing a search result or the nearest signal.
    pub focus_zoom: u8,

    /// Zoom used after the user's location is found.
    pub locate_zoom: u8,

    /// Radius of each density circle, metres.
    pub density_radius_m: f64,

    /// Crowd hotspots shown in crowd mode.
    pub hotspots: Vec<HotspotConfig>,

    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl DemoConfig {
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !self.bounds.is_valid() {
            return Err(CoreError::Config(format!("invalid bounding box {:?}", self.bounds)));
        }
        self.countdown.validate()?;
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick interval must be non-zero".into()));
        }
        if !(self.density_radius_m.is_finite() && self.density_radius_m > 0.0) {
            return Err(CoreError::Config(format!(
                "density radius {} must be positive",
                self.density_radius_m
            )));
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bounds:                   BoundingBox::pune(),
            signal_count:             120,
            countdown:                CountdownRange::default(),
            countdown_zoom_threshold: 15,
            tick_interval_ms:         1_000,
            initial_center:           GeoPoint::new(18.5204, 73.8567),
            initial_zoom:             12,
            focus_zoom:               15,
            locate_zoom:              14,
            density_radius_m:         80.0,
            hotspots: vec![
                HotspotConfig::new("Market Area 1", 18.52, 73.84),
                HotspotConfig::new("Mall Zone 2", 18.53, 73.87),
                HotspotConfig::new("Bus Stand Hub", 18.50, 73.86),
            ],
            seed: None,
        }
    }
}
