//! Zoom-gated countdown label visibility.

use crate::surface::sync_layer;
use crate::{LayerGroup, LayerTable, MapSurface};

/// Attach/detach counts from one reconciliation pass.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Reconciled {
    pub attached: usize,
    pub detached: usize,
}

impl Reconciled {
    pub fn is_noop(&self) -> bool {
        self.attached == 0 && self.detached == 0
    }

    pub(crate) fn record(&mut self, change: Option<bool>) {
        match change {
            Some(true)  => self.attached += 1,
            Some(false) => self.detached += 1,
            None => {}
        }
    }
}

/// Shows countdown labels only when the map is zoomed in far enough for them
/// not to clutter the view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VisibilityPolicy {
    threshold: u8,
}

impl VisibilityPolicy {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[inline]
    pub fn should_show_countdown(&self, zoom: u8) -> bool {
        zoom >= self.threshold
    }

    /// Bring every countdown layer in line with the decision for `zoom`.
    ///
    /// Layers already in the right state are left alone, so repeating the
    /// call with the same zoom touches nothing.
    pub fn reconcile<M: MapSurface + ?Sized>(
        &self,
        zoom:    u8,
        table:   &LayerTable,
        surface: &mut M,
    ) -> Reconciled {
        let show = self.should_show_countdown(zoom);
        let mut out = Reconciled::default();
        for (layer, overlay) in table.layers_in(LayerGroup::Countdowns) {
            out.record(sync_layer(surface, layer, overlay, show));
        }
        if !out.is_noop() {
            log::debug!(
                "countdown labels at zoom {zoom}: +{} -{}",
                out.attached, out.detached
            );
        }
        out
    }
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self::new(15)
    }
}
