//! CSV loader for hard-coded signal sites.
//!
//! # CSV format
//!
//! One row per signal, in id order.  `density` may be empty, in which case a
//! random tier is drawn when the registry is built.
//!
//! ```csv
//! lat,lon,density
//! 18.5314,73.8446,high
//! 18.5089,73.8259,
//! 18.5590,73.7868,2
//! ```
//!
//! **`density`** field: `low`/`medium`/`high` (any case) or `1`/`2`/`3`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ap_core::GeoPoint;

use crate::{DensityTier, SignalError, SignalResult};

/// A fixed signal position, optionally with a fixed density tier.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalSite {
    pub position: GeoPoint,
    pub density:  Option<DensityTier>,
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SiteRecord {
    lat:     f64,
    lon:     f64,
    #[serde(default)]
    density: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load signal sites from a CSV file.
pub fn load_sites_csv(path: &Path) -> SignalResult<Vec<SignalSite>> {
    let file = std::fs::File::open(path)?;
    load_sites_reader(file)
}

/// Like [`load_sites_csv`] but accepts any `Read` source.
pub fn load_sites_reader<R: Read>(reader: R) -> SignalResult<Vec<SignalSite>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut sites = Vec::new();

    for (row, result) in csv_reader.deserialize::<SiteRecord>().enumerate() {
        let rec = result.map_err(|e| SignalError::Parse(e.to_string()))?;
        // +2: one for the header, one for 1-based line numbers.
        let line = row + 2;

        if !(rec.lat.is_finite() && (-90.0..=90.0).contains(&rec.lat))
            || !(rec.lon.is_finite() && (-180.0..=180.0).contains(&rec.lon))
        {
            return Err(SignalError::Parse(format!(
                "line {line}: coordinate ({}, {}) is out of range",
                rec.lat, rec.lon
            )));
        }

        let density = match rec.density.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(DensityTier::parse(s).ok_or_else(|| {
                SignalError::Parse(format!(
                    "line {line}: invalid density {s:?}: expected low, medium, high, or 1-3"
                ))
            })?),
        };

        sites.push(SignalSite { position: GeoPoint::new(rec.lat, rec.lon), density });
    }

    Ok(sites)
}
