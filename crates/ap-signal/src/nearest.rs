//! Linear nearest-signal scan.
//!
//! O(n) in the signal count.  At demo scale (~120 signals) this is cheaper
//! than maintaining a spatial index.

use ap_core::GeoPoint;

use crate::Signal;

/// The signal closest to `from` by haversine distance, with that distance in
/// metres.
///
/// Ties keep the first signal seen.  Returns `None` only for an empty slice.
pub fn nearest_with_distance(from: GeoPoint, signals: &[Signal]) -> Option<(&Signal, f64)> {
    let mut best: Option<(&Signal, f64)> = None;
    for signal in signals {
        let d = from.distance_m(signal.position());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((signal, d)),
        }
    }
    best
}

/// Like [`nearest_with_distance`] without the distance.
#[inline]
pub fn nearest(from: GeoPoint, signals: &[Signal]) -> Option<&Signal> {
    nearest_with_distance(from, signals).map(|(s, _)| s)
}
