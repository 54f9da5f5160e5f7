//! One-shot geolocation.

use ap_core::GeoPoint;

use crate::GeolocationError;

/// Source of the user's position.
///
/// One call is one request; the session never polls or watches.
pub trait GeolocationProvider {
    fn locate(&mut self) -> Result<GeoPoint, GeolocationError>;
}

/// A provider that always answers with the same result.
///
/// Stands in for a device in tests and the headless demo; `set` changes the
/// answer between requests.
#[derive(Debug, Clone)]
pub struct FixedLocation {
    reply: Result<GeoPoint, GeolocationError>,
    /// Number of `locate` calls served.
    pub requests: usize,
}

impl FixedLocation {
    pub fn at(position: GeoPoint) -> Self {
        Self { reply: Ok(position), requests: 0 }
    }

    pub fn failing(err: GeolocationError) -> Self {
        Self { reply: Err(err), requests: 0 }
    }

    pub fn set(&mut self, reply: Result<GeoPoint, GeolocationError>) {
        self.reply = reply;
    }
}

impl GeolocationProvider for FixedLocation {
    fn locate(&mut self) -> Result<GeoPoint, GeolocationError> {
        self.requests += 1;
        self.reply.clone()
    }
}
