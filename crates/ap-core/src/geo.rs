//! Geographic coordinate type and bounding boxes.
//!
//! `GeoPoint` stores `f64` latitude/longitude, matching what map widgets and
//! geolocation providers hand back.  All distances are haversine metres.

use crate::SimRng;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// The point `metres` due north of `self` (spherical approximation).
    ///
    /// Handy for placing fixtures at known distances.
    pub fn north_by(self, metres: f64) -> GeoPoint {
        const M_PER_DEG_LAT: f64 = 111_194.93;
        GeoPoint::new(self.lat + metres / M_PER_DEG_LAT, self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// An axis-aligned lat/lon rectangle.
///
/// Bounds are half-open for sampling (`[min, max)`) and closed for
/// `contains`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self { lat_min, lat_max, lon_min, lon_max }
    }

    /// Greater Pune, the reference deployment.
    pub fn pune() -> Self {
        Self::new(18.42, 18.62, 73.75, 73.95)
    }

    /// `false` if either span is empty, inverted, or not finite.
    pub fn is_valid(&self) -> bool {
        let finite = [self.lat_min, self.lat_max, self.lon_min, self.lon_max]
            .iter()
            .all(|v| v.is_finite());
        finite && self.lat_min < self.lat_max && self.lon_min < self.lon_max
    }

    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&p.lat)
            && (self.lon_min..=self.lon_max).contains(&p.lon)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.lat_min + self.lat_max) * 0.5,
            (self.lon_min + self.lon_max) * 0.5,
        )
    }

    /// Draw a point uniformly inside the box.
    ///
    /// The box must satisfy [`is_valid`](Self::is_valid); callers validate
    /// configuration up front.
    pub fn sample(&self, rng: &mut SimRng) -> GeoPoint {
        let lat = rng.gen_range(self.lat_min..self.lat_max);
        let lon = rng.gen_range(self.lon_min..self.lon_max);
        GeoPoint::new(lat, lon)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::pune()
    }
}
