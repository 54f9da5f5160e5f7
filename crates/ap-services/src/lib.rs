//! `ap-services` — the external collaborators the core talks to.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`geolocation`] | `GeolocationProvider` trait, `FixedLocation`               |
//! | [`geocoder`]    | `Geocoder` trait, `GeocodeHit`, offline `Gazetteer`        |
//! | [`router`]      | `Router` trait, `Route`, `StraightLineRouter`              |
//! | [`tracker`]     | `RouteTracker` — single active route, stale-reply guard    |
//! | [`error`]       | `GeolocationError`, `ServiceError`, `ServiceResult<T>`     |
//!
//! Real deployments bind these traits to a browser geolocation API, a hosted
//! geocoder and a hosted routing engine.  The bundled implementations are
//! offline stand-ins; none of them retries.

pub mod error;
pub mod geocoder;
pub mod geolocation;
pub mod router;
pub mod tracker;


pub use error::{GeolocationError, ServiceError, ServiceResult};
pub use geocoder::{Gazetteer, GeocodeHit, Geocoder};
pub use geolocation::{FixedLocation, GeolocationProvider};
pub use router::{Route, Router, StraightLineRouter};
pub use tracker::{RouteTracker, RouteUpdate};
