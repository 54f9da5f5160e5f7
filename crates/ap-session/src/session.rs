//! The `Session` struct and its event loop.

use std::time::Instant;

use ap_core::{DemoConfig, GeoPoint, RouteRequestId, SessionClock, SignalId, SimRng, Tick};
use ap_overlay::{LayerTable, MapSurface, ModeSwitch, OverlayMode, VisibilityPolicy, overlay};
use ap_services::{
    GeocodeHit, Geocoder, GeolocationError, GeolocationProvider, Route, RouteTracker,
    RouteUpdate, Router, ServiceResult,
};
use ap_signal::{Signal, SignalRegistry};

use crate::{Event, EventQueue, SessionError, SessionObserver, SessionResult};

/// Status line after a successful geolocation.
pub const STATUS_LOCATED: &str = "Location found";
/// Status line after a failed geolocation.
pub const STATUS_LOCATE_FAILED: &str = "Location denied/unavailable";
/// Status line while a geolocation request is outstanding.
pub const STATUS_LOCATING: &str = "Locating…";
/// Status line after a search when no origin is known yet.
pub const STATUS_SEARCH_NEEDS_ORIGIN: &str =
    "Search selected. Click 'Show my location' to route from your position.";
/// Alert after clicking a signal before the user's position is known.
pub const ALERT_CLICK_NEEDS_ORIGIN: &str =
    "Allow location (click 'Show my location') to route to this signal.";

// ── Session ───────────────────────────────────────────────────────────────────

/// All state of one map session, owned by the composition root.
///
/// `Session<M, G, C, R>` owns what would otherwise be page-level globals: the
/// signal registry, user position and overlay mode live here and change only
/// while an [`Event`] is being handled.  Events are handled one at a time in
/// FIFO order; follow-up work (adapter replies, zoom changes caused by
/// re-centering) is queued behind them.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<M, G, C, R>
where
    M: MapSurface,
    G: GeolocationProvider,
    C: Geocoder,
    R: Router,
{
    /// Demo constants (counts, ranges, zoom levels).
    pub config: DemoConfig,

    /// Counts scheduler ticks.
    pub clock: SessionClock,

    /// The fixed signal population.
    pub registry: SignalRegistry,

    /// Display handles for every signal, hotspot, the user and the route.
    pub layers: LayerTable,

    /// The map widget.
    pub map: M,

    pub visibility: VisibilityPolicy,

    pub modes: ModeSwitch,

    /// At most one active route.
    pub routes: RouteTracker,

    /// Set by the last successful geolocation; never merged.
    pub user_position: Option<GeoPoint>,

    pub geolocation: G,
    pub geocoder:    C,
    pub router:      R,

    pub(crate) rng:   SimRng,
    pub(crate) queue: EventQueue,
}

impl<M, G, C, R> Session<M, G, C, R>
where
    M: MapSurface,
    G: GeolocationProvider,
    C: Geocoder,
    R: Router,
{
    // ── Public API ────────────────────────────────────────────────────────

    /// Queue an event for the next [`dispatch_pending`](Self::dispatch_pending).
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Events waiting to be handled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Handle queued events until the queue is empty, including any follow-up
    /// events they enqueue.  Returns how many were handled.
    pub fn dispatch_pending<O: SessionObserver>(&mut self, observer: &mut O) -> usize {
        let mut handled = 0;
        while let Some(event) = self.queue.pop() {
            log::trace!("handling {}", event.kind());
            self.handle(event, observer);
            handled += 1;
        }
        handled
    }

    /// Drive exactly `n` scheduler ticks, draining the queue after each.
    ///
    /// Events already queued are handled before the first tick.
    pub fn run_ticks<O: SessionObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.queue.push(Event::Tick);
            self.dispatch_pending(observer);
        }
    }

    /// Like [`run_ticks`](Self::run_ticks) but paced in real time at
    /// `config.tick_interval()`.
    ///
    /// `inject` is polled before every tick for host input (clicks, searches).
    pub fn run_paced<O, F>(&mut self, n: u64, observer: &mut O, mut inject: F)
    where
        O: SessionObserver,
        F: FnMut(Tick) -> Vec<Event>,
    {
        let interval = self.config.tick_interval();
        let mut next = Instant::now();
        for _ in 0..n {
            for event in inject(self.clock.current_tick) {
                self.queue.push(event);
            }
            self.queue.push(Event::Tick);
            self.dispatch_pending(observer);

            next += interval;
            let now = Instant::now();
            if next > now {
                std::thread::sleep(next - now);
            } else {
                // Running late: do not try to catch up with a burst of ticks.
                next = now;
            }
        }
    }

    /// The user's last known position.
    pub fn user_position(&self) -> SessionResult<GeoPoint> {
        self.user_position.ok_or(SessionError::UserLocationUnavailable)
    }

    /// The signal closest to the user.
    pub fn nearest_signal(&self) -> SessionResult<&Signal> {
        let from = self.user_position()?;
        self.registry.nearest(from).ok_or(SessionError::RegistryEmpty)
    }

    pub fn signal(&self, id: SignalId) -> SessionResult<&Signal> {
        self.registry.get(id).ok_or(SessionError::UnknownSignal(id))
    }

    pub fn mode(&self) -> OverlayMode {
        self.modes.active()
    }

    pub fn active_route(&self) -> Option<&Route> {
        self.routes.active()
    }

    // ── Event handling ────────────────────────────────────────────────────

    fn handle<O: SessionObserver>(&mut self, event: Event, observer: &mut O) {
        match event {
            Event::Tick                => self.on_tick(observer),
            Event::ZoomChanged(zoom)   => self.on_zoom_changed(zoom),
            Event::ModeSelected(mode)  => self.on_mode_selected(mode, observer),
            Event::LocateRequested     => self.on_locate_requested(observer),
            Event::LocationResolved(r) => self.on_location_resolved(r, observer),
            Event::NearestRequested    => self.on_nearest_requested(observer),
            Event::SignalClicked(id)   => self.on_signal_clicked(id, observer),
            Event::SearchSubmitted(q)  => self.on_search_submitted(&q),
            Event::GeocodeResolved(r)  => self.on_geocode_resolved(r, observer),
            Event::RouteResolved { request, reply } => {
                self.on_route_resolved(request, reply, observer)
            }
        }
    }

    /// Countdown scheduler step: tick every signal, redraw, reconcile
    /// countdown visibility.
    fn on_tick<O: SessionObserver>(&mut self, observer: &mut O) {
        let flipped = self.registry.tick_all(&mut self.rng);
        self.publish_signals();

        let zoom = self.map.zoom();
        self.visibility.reconcile(zoom, &self.layers, &mut self.map);

        let tick = self.clock.current_tick;
        self.clock.advance();
        if !flipped.is_empty() {
            log::debug!("{tick}: {} signal(s) changed colour", flipped.len());
        }
        observer.on_tick(tick, &flipped);
    }

    /// Push every signal's current marker and countdown label to the table
    /// and redraw whichever of them is on the map.
    fn publish_signals(&mut self) {
        let registry = &self.registry;
        let layers   = &mut self.layers;
        let map      = &mut self.map;

        for signal in registry.iter() {
            let Some(handles) = layers.signal_layers(signal.id()) else {
                continue;
            };
            for (layer, content) in [
                (handles.marker, overlay::signal_marker(signal)),
                (handles.countdown, overlay::countdown_label(signal)),
            ] {
                if map.is_attached(layer) {
                    map.refresh(layer, &content);
                }
                layers.set_overlay(layer, content);
            }
        }
    }

    fn on_zoom_changed(&mut self, zoom: u8) {
        self.visibility.reconcile(zoom, &self.layers, &mut self.map);
    }

    fn on_mode_selected<O: SessionObserver>(&mut self, mode: OverlayMode, observer: &mut O) {
        self.modes.set_mode(mode, &self.layers, &mut self.map);
        observer.on_mode(mode);
    }

    fn on_locate_requested<O: SessionObserver>(&mut self, observer: &mut O) {
        let reply = self.geolocation.locate();
        // No provider at all: alert and leave the status line untouched.
        if let Err(GeolocationError::Unsupported) = reply {
            let err = SessionError::GeolocationFailed(GeolocationError::Unsupported);
            log::warn!("{err}");
            observer.on_alert(&err.user_message());
            return;
        }
        observer.on_status(STATUS_LOCATING);
        self.queue.push(Event::LocationResolved(reply));
    }

    fn on_location_resolved<O: SessionObserver>(
        &mut self,
        reply:    Result<GeoPoint, GeolocationError>,
        observer: &mut O,
    ) {
        match reply {
            Ok(position) => {
                self.user_position = Some(position);
                if let Some(old) = self.layers.user_layer() {
                    self.map.detach(old);
                }
                let layer = self.layers.set_user(position);
                if let Some(content) = self.layers.overlay(layer) {
                    self.map.attach(layer, content);
                }
                self.map.open_popup(layer);
                log::info!("user located at {position}");

                self.focus(position, self.config.locate_zoom);
                observer.on_status(STATUS_LOCATED);
            }
            Err(e) => {
                let err = SessionError::GeolocationFailed(e);
                log::warn!("{err}");
                observer.on_alert(&err.user_message());
                observer.on_status(STATUS_LOCATE_FAILED);
            }
        }
    }

    fn on_nearest_requested<O: SessionObserver>(&mut self, observer: &mut O) {
        let (id, position) = match self.nearest_signal() {
            Ok(s) => (s.id(), s.position()),
            Err(e) => {
                log::warn!("nearest signal: {e}");
                observer.on_alert(&e.user_message());
                return;
            }
        };
        // Signal markers are only drawn in signals mode.
        if self.modes.active() != OverlayMode::Signals {
            self.on_mode_selected(OverlayMode::Signals, observer);
        }
        if let Some(handles) = self.layers.signal_layers(id) {
            self.map.open_popup(handles.marker);
        }
        self.focus(position, self.config.focus_zoom);
        if let Some(from) = self.user_position {
            self.request_route(from, position);
        }
    }

    fn on_signal_clicked<O: SessionObserver>(&mut self, id: SignalId, observer: &mut O) {
        let to = match self.signal(id) {
            Ok(s) => s.position(),
            Err(e) => {
                log::warn!("click ignored: {e}");
                return;
            }
        };
        match self.user_position {
            Some(from) => self.request_route(from, to),
            None => observer.on_alert(ALERT_CLICK_NEEDS_ORIGIN),
        }
    }

    fn on_search_submitted(&mut self, query: &str) {
        let reply = self.geocoder.geocode(query);
        self.queue.push(Event::GeocodeResolved(reply));
    }

    fn on_geocode_resolved<O: SessionObserver>(
        &mut self,
        reply:    ServiceResult<GeocodeHit>,
        observer: &mut O,
    ) {
        let hit = match reply {
            Ok(hit) => hit,
            Err(e) => {
                log::warn!("geocoding failed: {e}");
                observer.on_alert(&format!("Search failed: {e}"));
                return;
            }
        };
        log::info!("search resolved to {} at {}", hit.name, hit.position);
        self.focus(hit.position, self.config.focus_zoom);
        match self.user_position {
            Some(from) => self.request_route(from, hit.position),
            None => observer.on_status(STATUS_SEARCH_NEEDS_ORIGIN),
        }
    }

    fn on_route_resolved<O: SessionObserver>(
        &mut self,
        request:  RouteRequestId,
        reply:    ServiceResult<Route>,
        observer: &mut O,
    ) {
        match self.routes.resolve(request, reply) {
            RouteUpdate::Shown => {
                let Some(route) = self.routes.active() else {
                    return;
                };
                let layer = self.layers.set_route(route.waypoints.clone(), route.distance_m);
                if let Some(content) = self.layers.overlay(layer) {
                    self.map.attach(layer, content);
                }
                log::info!(
                    "route {request}: {:.0} m, {:.0} s",
                    route.distance_m, route.duration_secs
                );
                observer.on_route(route);
            }
            RouteUpdate::Stale => {
                log::debug!("dropping reply for superseded route {request}");
            }
            RouteUpdate::Failed(e) => {
                log::warn!("routing failed: {e}");
                observer.on_alert(&format!("Routing failed: {e}"));
            }
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Re-centre the map and queue the zoom change the widget would report.
    fn focus(&mut self, center: GeoPoint, zoom: u8) {
        self.map.set_view(center, zoom);
        self.queue.push(Event::ZoomChanged(zoom));
    }

    /// Replace any displayed route with a fresh request from `from` to `to`.
    fn request_route(&mut self, from: GeoPoint, to: GeoPoint) {
        let (request, dropped) = self.routes.begin();
        if let Some(layer) = self.layers.route_layer() {
            if self.map.is_attached(layer) {
                self.map.detach(layer);
            }
        }
        if dropped {
            log::debug!("cleared previous route for request {request}");
        }
        let reply = self.router.route(from, to);
        self.queue.push(Event::RouteResolved { request, reply });
    }
}
