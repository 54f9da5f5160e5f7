//! `ap-signal` — the simulated signal population.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`signal`]    | `Signal`, `SignalColor`, `DensityTier`, `TickOutcome`      |
//! | [`generator`] | `CoordinateGenerator` — uniform points in a bounding box   |
//! | [`registry`]  | `SignalRegistry` — create-once population, `tick_all`      |
//! | [`nearest`]   | Linear nearest-signal scan                                 |
//! | [`loader`]    | `load_sites_csv` — hard-coded signal positions             |
//! | [`error`]     | `SignalError`, `SignalResult<T>`                           |
//!
//! # Countdown model
//!
//! Every scheduler tick calls [`SignalRegistry::tick_all`].  Each signal's
//! countdown drops by one; a signal that reaches zero flips colour and draws
//! a fresh countdown in the same call, so no observer ever sees a zero.

pub mod error;
pub mod generator;
pub mod loader;
pub mod nearest;
pub mod registry;
pub mod signal;

#[cfg(test)]
mod tests;

pub use error::{SignalError, SignalResult};
pub use generator::CoordinateGenerator;
pub use loader::{SignalSite, load_sites_csv, load_sites_reader};
pub use nearest::{nearest, nearest_with_distance};
pub use registry::SignalRegistry;
pub use signal::{DensityTier, Signal, SignalColor, TickOutcome};
