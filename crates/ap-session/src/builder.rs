//! Fluent builder for constructing a [`Session`].

use ap_core::{DemoConfig, SessionClock, SimRng};
use ap_overlay::{LayerTable, MapSurface, ModeSwitch, OverlayMode, VisibilityPolicy};
use ap_services::{Geocoder, GeolocationProvider, RouteTracker, Router};
use ap_signal::{CoordinateGenerator, SignalRegistry, SignalSite};

use crate::{EventQueue, Session, SessionResult};

/// Fluent builder for [`Session<M, G, C, R>`].
///
/// # Required inputs
///
/// - [`DemoConfig`]: signal count, countdown range, zoom levels, …
/// - `M: MapSurface`: the map widget
/// - `G: GeolocationProvider`, `C: Geocoder`, `R: Router`: adapters
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                         |
/// |---------------|-------------------------------------------------|
/// | `.sites(v)`   | `config.signal_count` random signals            |
/// | `.rng(r)`     | `SimRng::from_optional_seed(config.seed)`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(
///         DemoConfig::default(),
///         HeadlessMap::new(center, 12),
///         FixedLocation::at(home),
///         Gazetteer::pune(),
///         StraightLineRouter::default(),
///     )
///     .build()?;
/// session.run_ticks(60, &mut NoopObserver);
/// ```
pub struct SessionBuilder<M, G, C, R>
where
    M: MapSurface,
    G: GeolocationProvider,
    C: Geocoder,
    R: Router,
{
    config:      DemoConfig,
    map:         M,
    geolocation: G,
    geocoder:    C,
    router:      R,
    sites:       Option<Vec<SignalSite>>,
    rng:         Option<SimRng>,
}

impl<M, G, C, R> SessionBuilder<M, G, C, R>
where
    M: MapSurface,
    G: GeolocationProvider,
    C: Geocoder,
    R: Router,
{
    /// Create a builder with all required inputs.
    pub fn new(config: DemoConfig, map: M, geolocation: G, geocoder: C, router: R) -> Self {
        Self {
            config,
            map,
            geolocation,
            geocoder,
            router,
            sites: None,
            rng:   None,
        }
    }

    /// Place signals at fixed sites instead of scattering
    /// `config.signal_count` of them at random.
    pub fn sites(mut self, sites: Vec<SignalSite>) -> Self {
        self.sites = Some(sites);
        self
    }

    /// Supply the RNG explicitly (overrides `config.seed`).
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the config, create the signal population, register display
    /// layers, set the initial view, and apply the default mode.
    pub fn build(self) -> SessionResult<Session<M, G, C, R>> {
        self.config.validate()?;

        let mut rng = self
            .rng
            .unwrap_or_else(|| SimRng::from_optional_seed(self.config.seed));

        // ── Signal population (created exactly once) ──────────────────────
        let registry = match &self.sites {
            Some(sites) => SignalRegistry::from_sites(sites, self.config.countdown, &mut rng),
            None => SignalRegistry::create_all(
                self.config.signal_count,
                &CoordinateGenerator::new(self.config.bounds),
                self.config.countdown,
                &mut rng,
            ),
        };

        // ── Display layers and initial view ───────────────────────────────
        let layers = LayerTable::build(&registry, &self.config.hotspots, self.config.density_radius_m);
        let mut map = self.map;
        map.set_view(self.config.initial_center, self.config.initial_zoom);

        let visibility = VisibilityPolicy::new(self.config.countdown_zoom_threshold);
        visibility.reconcile(map.zoom(), &layers, &mut map);

        let mut modes = ModeSwitch::new();
        modes.set_mode(OverlayMode::Signals, &layers, &mut map);

        log::info!(
            "session ready: {} signals, {} layers, countdown labels from zoom {}",
            registry.len(),
            layers.len(),
            visibility.threshold(),
        );

        Ok(Session {
            clock: SessionClock::new(self.config.tick_interval()),
            config: self.config,
            registry,
            layers,
            map,
            visibility,
            modes,
            routes: RouteTracker::new(),
            user_position: None,
            geolocation: self.geolocation,
            geocoder: self.geocoder,
            router: self.router,
            rng,
            queue: EventQueue::new(),
        })
    }
}
