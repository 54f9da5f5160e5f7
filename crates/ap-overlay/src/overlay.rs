//! Display representations handed to the map surface.
//!
//! An [`Overlay`] is plain data: what to draw and where.  The surface decides
//! how (DOM element, sprite, terminal line).  Builders here turn domain
//! entities into overlays so every redraw produces the same text.

use std::fmt;

use ap_core::{GeoPoint, HotspotConfig};
use ap_signal::{DensityTier, Signal, SignalColor};

// ── FillColor ─────────────────────────────────────────────────────────────────

/// RGBA fill, rendered CSS-style.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl FillColor {
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Fill for a density circle: translucent green, yellow, or red.
    pub fn for_density(tier: DensityTier) -> Self {
        match tier {
            DensityTier::Low    => Self::rgba(46, 204, 113, 0.35),
            DensityTier::Medium => Self::rgba(241, 196, 15, 0.45),
            DensityTier::High   => Self::rgba(231, 76, 60, 0.55),
        }
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

// ── Overlay ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Overlay {
    /// Signal light icon with its popup.
    SignalMarker { at: GeoPoint, color: SignalColor, popup: String },

    /// Seconds-remaining label drawn under a signal.
    CountdownLabel { at: GeoPoint, remaining_secs: u32, color: SignalColor },

    /// Translucent traffic-density disc around a signal.
    DensityCircle { at: GeoPoint, radius_m: f64, fill: FillColor },

    /// Crowd hotspot icon.
    CrowdMarker { at: GeoPoint, name: String, popup: String },

    /// The user's own position.
    UserMarker { at: GeoPoint, popup: String },

    /// A rendered route polyline.
    RoutePath { waypoints: Vec<GeoPoint>, distance_m: f64 },
}

impl Overlay {
    /// Popup text bound to the overlay; labels, circles and routes have none.
    pub fn popup(&self) -> Option<&str> {
        match self {
            Overlay::SignalMarker { popup, .. }
            | Overlay::CrowdMarker { popup, .. }
            | Overlay::UserMarker { popup, .. } => Some(popup),
            _ => None,
        }
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

pub fn signal_popup(signal: &Signal) -> String {
    let light = match signal.color() {
        SignalColor::Green => "🟢 GREEN",
        SignalColor::Red   => "🔴 RED",
    };
    format!(
        "Signal {}\nStatus: {light}\nTraffic level: {}\n{}s",
        signal.id().0,
        signal.density().label(),
        signal.remaining_secs(),
    )
}

pub fn signal_marker(signal: &Signal) -> Overlay {
    Overlay::SignalMarker {
        at:    signal.position(),
        color: signal.color(),
        popup: signal_popup(signal),
    }
}

pub fn countdown_label(signal: &Signal) -> Overlay {
    Overlay::CountdownLabel {
        at:             signal.position(),
        remaining_secs: signal.remaining_secs(),
        color:          signal.color(),
    }
}

pub fn density_circle(signal: &Signal, radius_m: f64) -> Overlay {
    Overlay::DensityCircle {
        at:   signal.position(),
        radius_m,
        fill: FillColor::for_density(signal.density()),
    }
}

pub fn crowd_marker(hotspot: &HotspotConfig) -> Overlay {
    Overlay::CrowdMarker {
        at:    hotspot.position,
        name:  hotspot.name.clone(),
        popup: format!("{}\nCrowd hotspot (demo)", hotspot.name),
    }
}

pub fn user_marker(at: GeoPoint) -> Overlay {
    Overlay::UserMarker { at, popup: "📍 You are here".to_string() }
}
