//! Mutually exclusive overlay modes.

use std::fmt;
use std::str::FromStr;

use crate::surface::sync_layer;
use crate::visibility::Reconciled;
use crate::{LayerGroup, LayerTable, MapSurface};

/// Which overlay family is on screen.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OverlayMode {
    /// Signal light markers.
    #[default]
    Signals,
    /// Traffic-density circles.
    Density,
    /// Crowd hotspot markers.
    Crowd,
}

impl OverlayMode {
    pub const ALL: [OverlayMode; 3] = [OverlayMode::Signals, OverlayMode::Density, OverlayMode::Crowd];

    /// The layer family this mode displays.
    pub fn layer_group(self) -> LayerGroup {
        match self {
            OverlayMode::Signals => LayerGroup::SignalMarkers,
            OverlayMode::Density => LayerGroup::DensityCircles,
            OverlayMode::Crowd   => LayerGroup::CrowdMarkers,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverlayMode::Signals => "signals",
            OverlayMode::Density => "density",
            OverlayMode::Crowd   => "crowd",
        }
    }
}

impl fmt::Display for OverlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OverlayMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown overlay mode {s:?}: expected signals, density, or crowd"))
    }
}

// ── ModeSwitch ────────────────────────────────────────────────────────────────

/// Holds the active mode and applies mode changes to the surface.
#[derive(Debug, Default)]
pub struct ModeSwitch {
    active: OverlayMode,
}

impl ModeSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> OverlayMode {
        self.active
    }

    /// Show exactly the layers of `mode` and hide those of every other mode.
    ///
    /// The outcome depends only on `mode` and current attachment, so calling
    /// it twice is the same as calling it once.
    pub fn set_mode<M: MapSurface + ?Sized>(
        &mut self,
        mode:    OverlayMode,
        table:   &LayerTable,
        surface: &mut M,
    ) -> Reconciled {
        let mut out = Reconciled::default();
        for other in OverlayMode::ALL.into_iter().filter(|&m| m != mode) {
            for (layer, overlay) in table.layers_in(other.layer_group()) {
                out.record(sync_layer(surface, layer, overlay, false));
            }
        }
        for (layer, overlay) in table.layers_in(mode.layer_group()) {
            out.record(sync_layer(surface, layer, overlay, true));
        }

        if self.active != mode {
            log::info!("overlay mode {} -> {mode}", self.active);
        }
        self.active = mode;
        out
    }
}
