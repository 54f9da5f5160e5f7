//! The map display surface seen from the core.
//!
//! # Pluggability
//!
//! The session drives the map only through [`MapSurface`], so a browser
//! widget binding, a terminal renderer, and the in-memory [`HeadlessMap`]
//! are interchangeable.  Tile fetching, projection and rendering stay on the
//! surface side.

use std::collections::BTreeMap;

use ap_core::{GeoPoint, LayerId};

use crate::Overlay;

/// Operations the core needs from a map widget.
///
/// Layer ids are allocated by the caller (see
/// [`LayerTable`](crate::LayerTable)); the surface only tracks which of them
/// are currently drawn.
pub trait MapSurface {
    /// Centre the view on `center` at `zoom`.
    fn set_view(&mut self, center: GeoPoint, zoom: u8);

    /// The current zoom level.
    fn zoom(&self) -> u8;

    /// Start drawing `overlay` as `layer`.
    fn attach(&mut self, layer: LayerId, overlay: &Overlay);

    /// Stop drawing `layer`.  Detaching an unattached layer is a no-op.
    fn detach(&mut self, layer: LayerId);

    fn is_attached(&self, layer: LayerId) -> bool;

    /// Redraw an attached layer with new content.
    ///
    /// Default: detach and re-attach.
    fn refresh(&mut self, layer: LayerId, overlay: &Overlay) {
        if self.is_attached(layer) {
            self.detach(layer);
            self.attach(layer, overlay);
        }
    }

    /// Open the popup bound to `layer`, if it has one.
    fn open_popup(&mut self, _layer: LayerId) {}
}

/// Attach or detach `layer` so that its attachment matches `visible`.
///
/// Returns `Some(true)` if it attached, `Some(false)` if it detached, and
/// `None` if the layer was already in the wanted state.
pub fn sync_layer<M: MapSurface + ?Sized>(
    surface: &mut M,
    layer:   LayerId,
    overlay: &Overlay,
    visible: bool,
) -> Option<bool> {
    match (visible, surface.is_attached(layer)) {
        (true, false) => {
            surface.attach(layer, overlay);
            Some(true)
        }
        (false, true) => {
            surface.detach(layer);
            Some(false)
        }
        _ => None,
    }
}

// ── HeadlessMap ───────────────────────────────────────────────────────────────

/// In-memory [`MapSurface`] that records every call.
///
/// Used by tests and by the headless demo; nothing is drawn.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    pub center:       GeoPoint,
    zoom:             u8,
    attached:         BTreeMap<LayerId, Overlay>,
    /// Every `set_view` call in order.
    pub views:        Vec<(GeoPoint, u8)>,
    /// Every popup actually opened, in order.
    pub popups:       Vec<LayerId>,
    pub attach_calls: usize,
    pub detach_calls: usize,
    pub refresh_calls: usize,
}

impl HeadlessMap {
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            attached:      BTreeMap::new(),
            views:         Vec::new(),
            popups:        Vec::new(),
            attach_calls:  0,
            detach_calls:  0,
            refresh_calls: 0,
        }
    }

    /// Change the zoom as a user gesture would.  The caller is responsible
    /// for delivering the matching zoom-changed event.
    pub fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom;
    }

    pub fn overlay(&self, layer: LayerId) -> Option<&Overlay> {
        self.attached.get(&layer)
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    pub fn attached_layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.attached.keys().copied()
    }
}

impl MapSurface for HeadlessMap {
    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
        self.views.push((center, zoom));
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn attach(&mut self, layer: LayerId, overlay: &Overlay) {
        self.attach_calls += 1;
        self.attached.insert(layer, overlay.clone());
    }

    fn detach(&mut self, layer: LayerId) {
        self.detach_calls += 1;
        self.attached.remove(&layer);
    }

    fn is_attached(&self, layer: LayerId) -> bool {
        self.attached.contains_key(&layer)
    }

    fn refresh(&mut self, layer: LayerId, overlay: &Overlay) {
        if let Some(slot) = self.attached.get_mut(&layer) {
            self.refresh_calls += 1;
            *slot = overlay.clone();
        }
    }

    /// Records the call only when `layer` is drawn and carries a popup.
    fn open_popup(&mut self, layer: LayerId) {
        if self.attached.get(&layer).is_some_and(|o| o.popup().is_some()) {
            self.popups.push(layer);
        }
    }
}
