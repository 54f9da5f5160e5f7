//! Session inputs.
//!
//! Timer firings, user gestures and adapter replies are all `Event`s.  A
//! reply is never handled inside the request that caused it: the request
//! handler enqueues a `*Resolved` event, which runs after everything already
//! waiting in the queue.

use ap_core::{GeoPoint, RouteRequestId, SignalId};
use ap_overlay::OverlayMode;
use ap_services::{GeocodeHit, GeolocationError, Route, ServiceResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// One countdown-scheduler firing.
    Tick,

    /// The map's zoom level changed (user gesture or programmatic view).
    ZoomChanged(u8),

    /// A mode chip was selected.
    ModeSelected(OverlayMode),

    /// "Show my location" pressed.
    LocateRequested,

    /// Reply to `LocateRequested`.
    LocationResolved(Result<GeoPoint, GeolocationError>),

    /// "Nearest signal" pressed.
    NearestRequested,

    /// A signal marker was clicked.
    SignalClicked(SignalId),

    /// Free-text search submitted.
    SearchSubmitted(String),

    /// Reply to `SearchSubmitted`.
    GeocodeResolved(ServiceResult<GeocodeHit>),

    /// Reply to a routing request.
    RouteResolved {
        request: RouteRequestId,
        reply:   ServiceResult<Route>,
    },
}

impl Event {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Tick                => "tick",
            Event::ZoomChanged(_)      => "zoom-changed",
            Event::ModeSelected(_)     => "mode-selected",
            Event::LocateRequested     => "locate-requested",
            Event::LocationResolved(_) => "location-resolved",
            Event::NearestRequested    => "nearest-requested",
            Event::SignalClicked(_)    => "signal-clicked",
            Event::SearchSubmitted(_)  => "search-submitted",
            Event::GeocodeResolved(_)  => "geocode-resolved",
            Event::RouteResolved { .. } => "route-resolved",
        }
    }
}
