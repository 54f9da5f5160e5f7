//! The `Signal` entity and its countdown step.

use std::fmt;

use ap_core::{CountdownRange, GeoPoint, SignalId, SimRng};

// ── SignalColor ───────────────────────────────────────────────────────────────

/// Current light shown by a signal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalColor {
    Green,
    Red,
}

impl SignalColor {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            SignalColor::Green => SignalColor::Red,
            SignalColor::Red => SignalColor::Green,
        }
    }

    /// Fair coin.
    pub fn random(rng: &mut SimRng) -> Self {
        if rng.gen_bool(0.5) { SignalColor::Green } else { SignalColor::Red }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignalColor::Green => "GREEN",
            SignalColor::Red   => "RED",
        }
    }
}

impl fmt::Display for SignalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DensityTier ───────────────────────────────────────────────────────────────

/// Cosmetic traffic-density level.  Drives the density circle's fill colour
/// and nothing else; it is not correlated with the light.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DensityTier {
    Low,
    Medium,
    High,
}

impl DensityTier {
    pub const ALL: [DensityTier; 3] = [DensityTier::Low, DensityTier::Medium, DensityTier::High];

    /// Uniform over the three tiers.
    pub fn random(rng: &mut SimRng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            DensityTier::Low    => "Low",
            DensityTier::Medium => "Medium",
            DensityTier::High   => "High",
        }
    }

    /// Parse `low`/`medium`/`high` (any case) or the numeric levels `1`–`3`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "1"    => Some(DensityTier::Low),
            "medium" | "2" => Some(DensityTier::Medium),
            "high" | "3"   => Some(DensityTier::High),
            _ => None,
        }
    }
}

impl fmt::Display for DensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Signal ────────────────────────────────────────────────────────────────────

/// What a single [`Signal::tick`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Countdown decremented; colour unchanged.
    Counting,
    /// Countdown expired: colour flipped and a fresh countdown was drawn.
    Flipped,
}

/// A simulated traffic light.
///
/// `id`, `position` and `density` are fixed at construction.  `color` and
/// `remaining_secs` change only through [`tick`](Self::tick), which never
/// leaves `remaining_secs` at 0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Signal {
    id:             SignalId,
    position:       GeoPoint,
    color:          SignalColor,
    remaining_secs: u32,
    density:        DensityTier,
}

impl Signal {
    /// A zero `remaining_secs` is bumped to 1.
    pub fn new(
        id:             SignalId,
        position:       GeoPoint,
        color:          SignalColor,
        remaining_secs: u32,
        density:        DensityTier,
    ) -> Self {
        Self { id, position, color, remaining_secs: remaining_secs.max(1), density }
    }

    #[inline]
    pub fn id(&self) -> SignalId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    #[inline]
    pub fn color(&self) -> SignalColor {
        self.color
    }

    #[inline]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[inline]
    pub fn density(&self) -> DensityTier {
        self.density
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching 0 flips the colour once and redraws the countdown from
    /// `countdown` before returning.
    pub fn tick(&mut self, countdown: &CountdownRange, rng: &mut SimRng) -> TickOutcome {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return TickOutcome::Counting;
        }
        self.color = self.color.flipped();
        self.remaining_secs = countdown.sample(rng).max(1);
        TickOutcome::Flipped
    }
}
