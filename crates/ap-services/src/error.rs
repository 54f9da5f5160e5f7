//! Adapter error types.
//!
//! The core does not translate these; their `Display` text is what the user
//! sees in an alert.

use thiserror::Error;

use ap_core::GeoPoint;

/// Why a one-shot geolocation request failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position request timed out")]
    Timeout,

    #[error("position unavailable")]
    Unavailable,

    #[error("geolocation not supported")]
    Unsupported,
}

/// Failure reported by a geocoding or routing backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    #[error("no place matches {0:?}")]
    NotFound(String),

    #[error("empty search query")]
    EmptyQuery,

    #[error("no route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
