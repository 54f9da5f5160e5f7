//! Unit tests for ap-signal.

#[cfg(test)]
mod helpers {
    use ap_core::{CountdownRange, GeoPoint, SignalId};

    use crate::{DensityTier, Signal, SignalColor, SignalRegistry};

    pub fn origin() -> GeoPoint {
        GeoPoint::new(18.5204, 73.8567)
    }

    pub fn signal_at(id: u32, position: GeoPoint) -> Signal {
        Signal::new(SignalId(id), position, SignalColor::Green, 15, DensityTier::Low)
    }

    /// Three signals 100 m, 50 m and 200 m north of `origin()`.
    pub fn three_signal_registry() -> SignalRegistry {
        let o = origin();
        SignalRegistry::from_signals(
            vec![
                signal_at(1, o.north_by(100.0)),
                signal_at(2, o.north_by(50.0)),
                signal_at(3, o.north_by(200.0)),
            ],
            CountdownRange::default(),
        )
    }
}

// ── Signal::tick ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use ap_core::{CountdownRange, GeoPoint, SignalId, SimRng};

    use crate::{DensityTier, Signal, SignalColor, TickOutcome};

    fn signal(color: SignalColor, remaining: u32) -> Signal {
        Signal::new(SignalId(1), GeoPoint::new(18.5, 73.8), color, remaining, DensityTier::Medium)
    }

    #[test]
    fn counts_down_without_flipping() {
        let mut rng = SimRng::new(1);
        let mut s = signal(SignalColor::Red, 5);
        assert_eq!(s.tick(&CountdownRange::default(), &mut rng), TickOutcome::Counting);
        assert_eq!(s.remaining_secs(), 4);
        assert_eq!(s.color(), SignalColor::Red);
    }

    #[test]
    fn expiry_flips_once_and_redraws() {
        let range = CountdownRange::default();
        let mut rng = SimRng::new(2);
        let mut s = signal(SignalColor::Green, 1);
        assert_eq!(s.tick(&range, &mut rng), TickOutcome::Flipped);
        assert_eq!(s.color(), SignalColor::Red);
        assert!(range.contains(s.remaining_secs()), "got {}", s.remaining_secs());
    }

    #[test]
    fn zero_initial_countdown_is_bumped() {
        let s = signal(SignalColor::Green, 0);
        assert_eq!(s.remaining_secs(), 1);
    }

    #[test]
    fn full_cycle_period() {
        // With a degenerate 3..=3 range a signal flips exactly every 3 ticks.
        let range = CountdownRange::new(3, 3);
        let mut rng = SimRng::new(3);
        let mut s = signal(SignalColor::Green, 3);
        let flips: Vec<bool> = (0..9)
            .map(|_| s.tick(&range, &mut rng) == TickOutcome::Flipped)
            .collect();
        assert_eq!(
            flips,
            [false, false, true, false, false, true, false, false, true]
        );
        assert_eq!(s.color(), SignalColor::Red);
    }

    #[test]
    fn remaining_never_observed_at_zero() {
        let range = CountdownRange::default();
        let mut rng = SimRng::new(4);
        let mut s = signal(SignalColor::Red, 10);
        for _ in 0..1_000 {
            let before = s.color();
            let outcome = s.tick(&range, &mut rng);
            assert!((1..=20).contains(&s.remaining_secs()));
            match outcome {
                TickOutcome::Flipped  => assert_eq!(s.color(), before.flipped()),
                TickOutcome::Counting => assert_eq!(s.color(), before),
            }
        }
    }

    #[test]
    fn color_and_density_labels() {
        assert_eq!(SignalColor::Green.flipped(), SignalColor::Red);
        assert_eq!(SignalColor::Red.to_string(), "RED");
        assert_eq!(DensityTier::parse(" HIGH "), Some(DensityTier::High));
        assert_eq!(DensityTier::parse("2"), Some(DensityTier::Medium));
        assert_eq!(DensityTier::parse("4"), None);
        assert_eq!(DensityTier::Low.label(), "Low");
    }
}

// ── SignalRegistry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use std::collections::HashSet;

    use ap_core::{BoundingBox, CountdownRange, SignalId, SimRng};

    use crate::{CoordinateGenerator, DensityTier, SignalColor, SignalRegistry};

    fn reference_registry(seed: u64) -> SignalRegistry {
        let mut rng = SimRng::new(seed);
        SignalRegistry::create_all(
            120,
            &CoordinateGenerator::new(BoundingBox::pune()),
            CountdownRange::default(),
            &mut rng,
        )
    }

    #[test]
    fn create_all_initialises_every_field() {
        let reg = reference_registry(42);
        assert_eq!(reg.len(), 120);

        let bbox = BoundingBox::pune();
        let ids: HashSet<SignalId> = reg.ids().collect();
        assert_eq!(ids.len(), 120, "ids must be unique");
        for s in reg.iter() {
            assert!(bbox.contains(s.position()));
            assert!((10..=20).contains(&s.remaining_secs()));
        }
    }

    #[test]
    fn create_all_uses_every_colour_and_tier() {
        let reg = reference_registry(9);
        let colors: HashSet<SignalColor> = reg.iter().map(|s| s.color()).collect();
        let tiers: HashSet<DensityTier> = reg.iter().map(|s| s.density()).collect();
        assert_eq!(colors.len(), 2);
        assert_eq!(tiers.len(), 3);
    }

    #[test]
    fn ids_start_at_one() {
        let reg = reference_registry(1);
        assert!(reg.get(SignalId(0)).is_none());
        assert_eq!(reg.get(SignalId(1)).map(|s| s.id()), Some(SignalId(1)));
        assert_eq!(reg.get(SignalId(120)).map(|s| s.id()), Some(SignalId(120)));
        assert!(reg.get(SignalId(121)).is_none());
    }

    #[test]
    fn countdown_bounds_hold_over_many_ticks() {
        let mut reg = reference_registry(5);
        let mut rng = SimRng::new(55);
        for _ in 0..500 {
            reg.tick_all(&mut rng);
            for s in reg.iter() {
                assert!(s.remaining_secs() <= 20);
                assert!(s.remaining_secs() > 0);
            }
        }
    }

    #[test]
    fn tick_all_reports_exactly_the_flipped_signals() {
        let mut reg = reference_registry(6);
        let mut rng = SimRng::new(66);
        for _ in 0..60 {
            let before: Vec<(SignalColor, u32)> =
                reg.iter().map(|s| (s.color(), s.remaining_secs())).collect();
            let flipped: HashSet<SignalId> = reg.tick_all(&mut rng).into_iter().collect();

            for (s, (color, remaining)) in reg.iter().zip(before) {
                if remaining == 1 {
                    assert!(flipped.contains(&s.id()));
                    assert_eq!(s.color(), color.flipped());
                } else {
                    assert!(!flipped.contains(&s.id()));
                    assert_eq!(s.color(), color);
                    assert_eq!(s.remaining_secs(), remaining - 1);
                }
            }
        }
    }

    #[test]
    fn empty_registry() {
        let mut rng = SimRng::new(0);
        let mut reg = SignalRegistry::create_all(
            0,
            &CoordinateGenerator::default(),
            CountdownRange::default(),
            &mut rng,
        );
        assert!(reg.is_empty());
        assert!(reg.tick_all(&mut rng).is_empty());
    }
}

// ── Nearest-signal query ───────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use ap_core::SignalId;

    use super::helpers::{origin, signal_at, three_signal_registry};
    use crate::{nearest, nearest_with_distance};

    #[test]
    fn empty_slice_is_none() {
        assert!(nearest(origin(), &[]).is_none());
    }

    #[test]
    fn picks_the_fifty_metre_signal() {
        let reg = three_signal_registry();
        let (s, d) = reg.nearest_with_distance(origin()).unwrap();
        assert_eq!(s.id(), SignalId(2));
        assert!((d - 50.0).abs() < 0.5, "got {d}");
    }

    #[test]
    fn first_seen_wins_ties() {
        let o = origin();
        let signals = vec![signal_at(1, o.north_by(75.0)), signal_at(2, o.north_by(75.0))];
        assert_eq!(nearest(o, &signals).map(|s| s.id()), Some(SignalId(1)));
    }

    #[test]
    fn single_signal() {
        let o = origin();
        let signals = vec![signal_at(1, o.north_by(5_000.0))];
        let (s, d) = nearest_with_distance(o, &signals).unwrap();
        assert_eq!(s.id(), SignalId(1));
        assert!((d - 5_000.0).abs() < 1.0);
    }
}

// ── CSV site loader ────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use ap_core::{CountdownRange, SimRng};

    use crate::{DensityTier, SignalRegistry, load_sites_reader};

    const SITES: &str = "\
lat,lon,density\n\
18.5314,73.8446,high\n\
18.5089,73.8259,\n\
18.5590,73.7868,2\n\
";

    #[test]
    fn parses_rows_in_order() {
        let sites = load_sites_reader(Cursor::new(SITES)).unwrap();
        assert_eq!(sites.len(), 3);
        assert_eq!(sites[0].position.lat, 18.5314);
        assert_eq!(sites[0].density, Some(DensityTier::High));
        assert_eq!(sites[1].density, None);
        assert_eq!(sites[2].density, Some(DensityTier::Medium));
    }

    #[test]
    fn registry_from_sites_keeps_fixed_fields() {
        let sites = load_sites_reader(Cursor::new(SITES)).unwrap();
        let mut rng = SimRng::new(8);
        let reg = SignalRegistry::from_sites(&sites, CountdownRange::default(), &mut rng);
        assert_eq!(reg.len(), 3);
        let first = reg.iter().next().unwrap();
        assert_eq!(first.position(), sites[0].position);
        assert_eq!(first.density(), DensityTier::High);
    }

    #[test]
    fn rejects_bad_density() {
        let csv = "lat,lon,density\n18.5,73.8,extreme\n";
        let err = load_sites_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn rejects_out_of_range_coordinate() {
        let csv = "lat,lon,density\n95.0,73.8,low\n";
        assert!(load_sites_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn rejects_non_numeric() {
        let csv = "lat,lon,density\nnorth,73.8,low\n";
        assert!(load_sites_reader(Cursor::new(csv)).is_err());
    }
}
