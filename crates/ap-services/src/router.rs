//! Routing adapter trait and the offline straight-line router.
//!
//! # Pluggability
//!
//! The session requests paths only through [`Router`], so a hosted routing
//! service binding can replace [`StraightLineRouter`] without touching the
//! core.

use ap_core::GeoPoint;

use crate::{ServiceError, ServiceResult};

/// An ordered path from origin to destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Points to draw in order; first is the origin, last the destination.
    pub waypoints: Vec<GeoPoint>,
    /// Path length in metres.
    pub distance_m: f64,
    /// Expected travel time in seconds.
    pub duration_secs: f64,
}

impl Route {
    pub fn origin(&self) -> Option<GeoPoint> {
        self.waypoints.first().copied()
    }

    pub fn destination(&self) -> Option<GeoPoint> {
        self.waypoints.last().copied()
    }
}

/// Computes a path between two coordinates.
pub trait Router {
    fn route(&mut self, from: GeoPoint, to: GeoPoint) -> ServiceResult<Route>;
}

// ── StraightLineRouter ────────────────────────────────────────────────────────

/// Connects origin and destination directly and times the leg at a fixed
/// speed.
#[derive(Debug, Clone, Copy)]
pub struct StraightLineRouter {
    speed_mps: f64,
}

impl StraightLineRouter {
    /// Urban car speed, 30 km/h.
    pub const DEFAULT_SPEED_MPS: f64 = 30_000.0 / 3_600.0;

    pub fn new(speed_mps: f64) -> Self {
        Self { speed_mps }
    }
}

impl Default for StraightLineRouter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED_MPS)
    }
}

impl Router for StraightLineRouter {
    fn route(&mut self, from: GeoPoint, to: GeoPoint) -> ServiceResult<Route> {
        if !(self.speed_mps.is_finite() && self.speed_mps > 0.0) {
            return Err(ServiceError::Unavailable(format!("invalid speed {} m/s", self.speed_mps)));
        }
        let distance_m = from.distance_m(to);
        if !distance_m.is_finite() {
            return Err(ServiceError::NoRoute { from, to });
        }
        Ok(Route {
            waypoints: vec![from, to],
            distance_m,
            duration_secs: distance_m / self.speed_mps,
        })
    }
}
