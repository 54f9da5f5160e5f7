//! `SignalRegistry` — the fixed population of simulated signals.
//!
//! Signals are created exactly once per session and never added or removed.
//! `SignalId`s run from 1 to `len()`, so `id.index() - 1` is the storage
//! slot.

use ap_core::{CountdownRange, GeoPoint, SignalId, SimRng};

use crate::loader::SignalSite;
use crate::nearest::{nearest, nearest_with_distance};
use crate::{CoordinateGenerator, DensityTier, Signal, SignalColor, TickOutcome};

pub struct SignalRegistry {
    signals:   Vec<Signal>,
    countdown: CountdownRange,
}

impl SignalRegistry {
    /// Create `count` signals at random positions with random initial colour,
    /// countdown and density tier.
    pub fn create_all(
        count:     usize,
        generator: &CoordinateGenerator,
        countdown: CountdownRange,
        rng:       &mut SimRng,
    ) -> Self {
        let signals = (0..count)
            .map(|i| {
                let position = generator.generate(rng);
                random_signal(slot_id(i), position, None, &countdown, rng)
            })
            .collect();
        log::debug!("created {count} random signals inside {:?}", generator.bounds());
        Self { signals, countdown }
    }

    /// Create one signal per fixed site.  Sites without a density tier get a
    /// random one.
    pub fn from_sites(sites: &[SignalSite], countdown: CountdownRange, rng: &mut SimRng) -> Self {
        let signals = sites
            .iter()
            .enumerate()
            .map(|(i, site)| random_signal(slot_id(i), site.position, site.density, &countdown, rng))
            .collect();
        log::debug!("created {} signals from fixed sites", sites.len());
        Self { signals, countdown }
    }

    /// Wrap pre-built signals.  Ids must be `1..=len` in order.
    pub fn from_signals(signals: Vec<Signal>, countdown: CountdownRange) -> Self {
        debug_assert!(
            signals.iter().enumerate().all(|(i, s)| s.id() == slot_id(i)),
            "signal ids must be sequential from 1",
        );
        Self { signals, countdown }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn countdown(&self) -> CountdownRange {
        self.countdown
    }

    pub fn get(&self, id: SignalId) -> Option<&Signal> {
        id.index().checked_sub(1).and_then(|i| self.signals.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Signal> + '_ {
        self.signals.iter()
    }

    pub fn as_slice(&self) -> &[Signal] {
        &self.signals
    }

    pub fn ids(&self) -> impl Iterator<Item = SignalId> + '_ {
        self.signals.iter().map(Signal::id)
    }

    pub fn nearest(&self, from: GeoPoint) -> Option<&Signal> {
        nearest(from, &self.signals)
    }

    pub fn nearest_with_distance(&self, from: GeoPoint) -> Option<(&Signal, f64)> {
        nearest_with_distance(from, &self.signals)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Tick every signal once.  Returns the ids of signals that flipped.
    pub fn tick_all(&mut self, rng: &mut SimRng) -> Vec<SignalId> {
        let countdown = self.countdown;
        self.signals
            .iter_mut()
            .filter_map(|s| match s.tick(&countdown, rng) {
                TickOutcome::Flipped => Some(s.id()),
                TickOutcome::Counting => None,
            })
            .collect()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
fn slot_id(i: usize) -> SignalId {
    SignalId(i as u32 + 1)
}

fn random_signal(
    id:        SignalId,
    position:  GeoPoint,
    density:   Option<DensityTier>,
    countdown: &CountdownRange,
    rng:       &mut SimRng,
) -> Signal {
    let color = SignalColor::random(rng);
    let remaining = countdown.sample(rng);
    let density = density.unwrap_or_else(|| DensityTier::random(rng));
    Signal::new(id, position, color, remaining, density)
}
