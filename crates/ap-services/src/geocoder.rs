//! Free-text place search.

use ap_core::GeoPoint;

use crate::{ServiceError, ServiceResult};

/// A resolved search result.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub name:     String,
    pub position: GeoPoint,
}

/// Resolves a free-text query to a coordinate.
pub trait Geocoder {
    fn geocode(&mut self, query: &str) -> ServiceResult<GeocodeHit>;
}

// ── Gazetteer ─────────────────────────────────────────────────────────────────

/// Offline geocoder over a fixed list of named places.
///
/// Matching is case-insensitive: an exact name wins, otherwise the first
/// place whose name contains the query.  A query of the form `lat,lon` is
/// returned as-is.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: Vec<GeocodeHit>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.places.push(GeocodeHit { name: name.into(), position: GeoPoint::new(lat, lon) });
        self
    }

    /// A handful of Pune landmarks.
    pub fn pune() -> Self {
        Self::new()
            .with_place("Shaniwar Wada", 18.5195, 73.8553)
            .with_place("Pune Railway Station", 18.5286, 73.8743)
            .with_place("Swargate Bus Stand", 18.5018, 73.8636)
            .with_place("Koregaon Park", 18.5362, 73.8940)
            .with_place("Fergusson College Road", 18.5236, 73.8414)
            .with_place("Aga Khan Palace", 18.5523, 73.9015)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&mut self, query: &str) -> ServiceResult<GeocodeHit> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::EmptyQuery);
        }
        if let Some(position) = parse_lat_lon(query) {
            return Ok(GeocodeHit { name: query.to_string(), position });
        }

        let needle = query.to_lowercase();
        let exact = self.places.iter().find(|p| p.name.to_lowercase() == needle);
        exact
            .or_else(|| self.places.iter().find(|p| p.name.to_lowercase().contains(&needle)))
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(query.to_string()))
    }
}

fn parse_lat_lon(s: &str) -> Option<GeoPoint> {
    let (lat, lon) = s.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon))
        .then(|| GeoPoint::new(lat, lon))
}
