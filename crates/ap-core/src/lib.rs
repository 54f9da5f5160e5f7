//! `ap-core` — foundational types for the AplaPune signal map.
//!
//! Every other `ap-*` crate depends on this one.  It has no `ap-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `SignalId`, `LayerId`, `RouteRequestId`                 |
//! | [`geo`]    | `GeoPoint`, haversine distance, `BoundingBox`           |
//! | [`time`]   | `Tick`, `SessionClock`                                  |
//! | [`rng`]    | `SimRng` (entropy or fixed seed)                        |
//! | [`config`] | `DemoConfig`, `CountdownRange`, `HotspotConfig`         |
//! | [`error`]  | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CountdownRange, DemoConfig, HotspotConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{BoundingBox, GeoPoint};
pub use ids::{LayerId, RouteRequestId, SignalId};
pub use rng::SimRng;
pub use time::{SessionClock, Tick};
