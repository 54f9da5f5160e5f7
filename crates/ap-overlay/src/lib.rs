//! `ap-overlay` — what the map shows and when.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`surface`]    | `MapSurface` trait, `HeadlessMap`, `sync_layer`             |
//! | [`overlay`]    | `Overlay` display data and builders                         |
//! | [`layers`]     | `LayerTable` — `SignalId` → layer handles side table        |
//! | [`visibility`] | `VisibilityPolicy` — zoom-gated countdown labels            |
//! | [`mode`]       | `OverlayMode`, `ModeSwitch`                                 |
//!
//! # Layer ownership
//!
//! | Group            | Governed by                               |
//! |------------------|-------------------------------------------|
//! | `SignalMarkers`  | `ModeSwitch` (`Signals` mode)             |
//! | `DensityCircles` | `ModeSwitch` (`Density` mode)             |
//! | `CrowdMarkers`   | `ModeSwitch` (`Crowd` mode)               |
//! | `Countdowns`     | `VisibilityPolicy` (zoom only)            |
//! | `User`, `Route`  | the session, on location / route replies  |

pub mod layers;
pub mod mode;
pub mod overlay;
pub mod surface;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use layers::{LayerGroup, LayerTable, SignalLayers};
pub use mode::{ModeSwitch, OverlayMode};
pub use overlay::{FillColor, Overlay};
pub use surface::{HeadlessMap, MapSurface, sync_layer};
pub use visibility::{Reconciled, VisibilityPolicy};
