//! `LayerTable` — side table from domain entities to display handles.
//!
//! Domain data (`Signal`) never carries rendering state.  Instead each
//! signal owns three layers here (marker, countdown label, density circle),
//! looked up by `SignalId`.  The table also keeps the latest `Overlay` for
//! every layer, so a layer can be (re-)attached at any time without asking
//! the domain again.
//!
//! `LayerId`s are dense: `LayerId(n)` is the n-th layer inserted.

use std::collections::BTreeMap;

use ap_core::{GeoPoint, HotspotConfig, LayerId, SignalId};
use ap_signal::{Signal, SignalRegistry};

use crate::overlay::{self, Overlay};

/// Which family a layer belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum LayerGroup {
    SignalMarkers,
    Countdowns,
    DensityCircles,
    CrowdMarkers,
    User,
    Route,
}

/// The display handles owned by one signal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SignalLayers {
    pub marker:    LayerId,
    pub countdown: LayerId,
    pub density:   LayerId,
}

#[derive(Default)]
pub struct LayerTable {
    overlays: Vec<Overlay>,
    groups:   Vec<LayerGroup>,
    signals:  BTreeMap<SignalId, SignalLayers>,
    user:     Option<LayerId>,
    route:    Option<LayerId>,
}

impl LayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every signal and hotspot.  Nothing is attached yet.
    pub fn build(registry: &SignalRegistry, hotspots: &[HotspotConfig], density_radius_m: f64) -> Self {
        let mut table = Self::new();
        for signal in registry.iter() {
            table.register_signal(signal, density_radius_m);
        }
        for hotspot in hotspots {
            table.insert(LayerGroup::CrowdMarkers, overlay::crowd_marker(hotspot));
        }
        table
    }

    /// Allocate a new layer holding `overlay`.
    pub fn insert(&mut self, group: LayerGroup, overlay: Overlay) -> LayerId {
        let id = LayerId(self.overlays.len() as u32);
        self.overlays.push(overlay);
        self.groups.push(group);
        id
    }

    pub fn register_signal(&mut self, signal: &Signal, density_radius_m: f64) -> SignalLayers {
        let layers = SignalLayers {
            marker:    self.insert(LayerGroup::SignalMarkers, overlay::signal_marker(signal)),
            countdown: self.insert(LayerGroup::Countdowns, overlay::countdown_label(signal)),
            density:   self.insert(LayerGroup::DensityCircles, overlay::density_circle(signal, density_radius_m)),
        };
        self.signals.insert(signal.id(), layers);
        layers
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn signal_layers(&self, id: SignalId) -> Option<SignalLayers> {
        self.signals.get(&id).copied()
    }

    pub fn overlay(&self, layer: LayerId) -> Option<&Overlay> {
        self.overlays.get(layer.index())
    }

    pub fn group(&self, layer: LayerId) -> Option<LayerGroup> {
        self.groups.get(layer.index()).copied()
    }

    /// All layers of `group` with their current overlays, in id order.
    pub fn layers_in(&self, group: LayerGroup) -> impl Iterator<Item = (LayerId, &Overlay)> + '_ {
        self.groups
            .iter()
            .zip(&self.overlays)
            .enumerate()
            .filter(move |(_, (g, _))| **g == group)
            .map(|(i, (_, o))| (LayerId(i as u32), o))
    }

    pub fn user_layer(&self) -> Option<LayerId> {
        self.user
    }

    pub fn route_layer(&self) -> Option<LayerId> {
        self.route
    }

    // ── Updates ───────────────────────────────────────────────────────────

    /// Replace the stored overlay.  Returns `false` for an unknown layer.
    pub fn set_overlay(&mut self, layer: LayerId, overlay: Overlay) -> bool {
        match self.overlays.get_mut(layer.index()) {
            Some(slot) => {
                *slot = overlay;
                true
            }
            None => false,
        }
    }

    /// Store the user marker at `at`, allocating its layer on first use.
    pub fn set_user(&mut self, at: GeoPoint) -> LayerId {
        let overlay = overlay::user_marker(at);
        match self.user {
            Some(id) => {
                self.set_overlay(id, overlay);
                id
            }
            None => {
                let id = self.insert(LayerGroup::User, overlay);
                self.user = Some(id);
                id
            }
        }
    }

    /// Store a route polyline, allocating the single route layer on first use.
    pub fn set_route(&mut self, waypoints: Vec<GeoPoint>, distance_m: f64) -> LayerId {
        let overlay = Overlay::RoutePath { waypoints, distance_m };
        match self.route {
            Some(id) => {
                self.set_overlay(id, overlay);
                id
            }
            None => {
                let id = self.insert(LayerGroup::Route, overlay);
                self.route = Some(id);
                id
            }
        }
    }
}
