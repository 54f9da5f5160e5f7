//! `ap-session` — the composition root of the AplaPune signal map.
//!
//! # Event loop
//!
//! ```text
//! host input / timer ──► EventQueue (FIFO) ──► Session::handle
//!                              ▲                    │
//!                              └── follow-ups ◄─────┘
//!
//!   Tick              → tick every signal, redraw markers + labels,
//!                       reconcile countdown visibility at current zoom
//!   ZoomChanged(z)    → reconcile countdown visibility at z
//!   ModeSelected(m)   → show exactly the layers of m
//!   LocateRequested   → geolocation → LocationResolved
//!   NearestRequested  → linear scan → popup, re-centre, route request
//!   SignalClicked(id) → route request (needs user position)
//!   SearchSubmitted   → geocoder → GeocodeResolved → re-centre, route request
//!   route request     → router → RouteResolved (stale replies dropped)
//! ```
//!
//! Handlers never call each other; anything that would have been a nested
//! callback becomes a queued follow-up event.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ap_core::DemoConfig;
//! use ap_overlay::HeadlessMap;
//! use ap_services::{FixedLocation, Gazetteer, StraightLineRouter};
//! use ap_session::{Event, NoopObserver, SessionBuilder};
//!
//! let cfg = DemoConfig::default();
//! let map = HeadlessMap::new(cfg.initial_center, cfg.initial_zoom);
//! let mut session = SessionBuilder::new(cfg, map, FixedLocation::at(home), Gazetteer::pune(), StraightLineRouter::default())
//!     .build()?;
//! session.push(Event::LocateRequested);
//! session.run_ticks(30, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod queue;
pub mod session;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use event::Event;
pub use observer::{NoopObserver, RecordingObserver, SessionObserver};
pub use queue::EventQueue;
pub use session::Session;
