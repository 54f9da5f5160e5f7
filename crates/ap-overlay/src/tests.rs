//! Unit tests for ap-overlay.
//!
//! Everything runs against `HeadlessMap`, which counts attach/detach calls so
//! idempotence can be asserted directly.

#[cfg(test)]
mod helpers {
    use ap_core::{BoundingBox, CountdownRange, DemoConfig, GeoPoint, SimRng};
    use ap_signal::{CoordinateGenerator, SignalRegistry};

    use crate::{HeadlessMap, LayerTable};

    pub fn fixture(signals: usize) -> (SignalRegistry, LayerTable, HeadlessMap) {
        let cfg = DemoConfig::default();
        let mut rng = SimRng::new(11);
        let registry = SignalRegistry::create_all(
            signals,
            &CoordinateGenerator::new(BoundingBox::pune()),
            CountdownRange::default(),
            &mut rng,
        );
        let table = LayerTable::build(&registry, &cfg.hotspots, cfg.density_radius_m);
        let map = HeadlessMap::new(GeoPoint::new(18.5204, 73.8567), 12);
        (registry, table, map)
    }
}

// ── Overlay builders ───────────────────────────────────────────────────────────

#[cfg(test)]
mod overlay {
    use ap_core::{GeoPoint, HotspotConfig, SignalId};
    use ap_signal::{DensityTier, Signal, SignalColor};

    use crate::overlay::{countdown_label, crowd_marker, density_circle, signal_popup};
    use crate::{FillColor, Overlay};

    fn signal() -> Signal {
        Signal::new(SignalId(7), GeoPoint::new(18.5, 73.85), SignalColor::Red, 12, DensityTier::High)
    }

    #[test]
    fn popup_text() {
        assert_eq!(
            signal_popup(&signal()),
            "Signal 7\nStatus: 🔴 RED\nTraffic level: High\n12s"
        );
    }

    #[test]
    fn countdown_carries_state() {
        match countdown_label(&signal()) {
            Overlay::CountdownLabel { remaining_secs, color, .. } => {
                assert_eq!(remaining_secs, 12);
                assert_eq!(color, SignalColor::Red);
            }
            other => panic!("unexpected overlay {other:?}"),
        }
    }

    #[test]
    fn density_fill_by_tier() {
        match density_circle(&signal(), 80.0) {
            Overlay::DensityCircle { radius_m, fill, .. } => {
                assert_eq!(radius_m, 80.0);
                assert_eq!(fill, FillColor::for_density(DensityTier::High));
            }
            other => panic!("unexpected overlay {other:?}"),
        }
        assert_eq!(
            FillColor::for_density(DensityTier::Low).to_string(),
            "rgba(46, 204, 113, 0.35)"
        );
    }

    #[test]
    fn crowd_marker_popup() {
        let o = crowd_marker(&HotspotConfig::new("Bus Stand Hub", 18.50, 73.86));
        assert_eq!(o.popup(), Some("Bus Stand Hub\nCrowd hotspot (demo)"));
    }

    #[test]
    fn route_has_no_popup() {
        let o = Overlay::RoutePath { waypoints: vec![], distance_m: 0.0 };
        assert_eq!(o.popup(), None);
    }
}

// ── LayerTable ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layers {
    use ap_core::{GeoPoint, SignalId};

    use super::helpers::fixture;
    use crate::{LayerGroup, Overlay};

    #[test]
    fn three_layers_per_signal_plus_hotspots() {
        let (_, table, _) = fixture(10);
        assert_eq!(table.len(), 10 * 3 + 3);
        assert_eq!(table.layers_in(LayerGroup::SignalMarkers).count(), 10);
        assert_eq!(table.layers_in(LayerGroup::Countdowns).count(), 10);
        assert_eq!(table.layers_in(LayerGroup::DensityCircles).count(), 10);
        assert_eq!(table.layers_in(LayerGroup::CrowdMarkers).count(), 3);
    }

    #[test]
    fn signal_layers_are_distinct_and_grouped() {
        let (_, table, _) = fixture(4);
        let l = table.signal_layers(SignalId(3)).unwrap();
        assert_eq!(table.group(l.marker), Some(LayerGroup::SignalMarkers));
        assert_eq!(table.group(l.countdown), Some(LayerGroup::Countdowns));
        assert_eq!(table.group(l.density), Some(LayerGroup::DensityCircles));
        assert!(table.signal_layers(SignalId(99)).is_none());
    }

    #[test]
    fn user_and_route_layers_are_reused() {
        let (_, mut table, _) = fixture(1);
        let a = GeoPoint::new(18.5, 73.8);
        let b = GeoPoint::new(18.6, 73.9);

        let u1 = table.set_user(a);
        let u2 = table.set_user(b);
        assert_eq!(u1, u2);
        assert_eq!(table.overlay(u1).and_then(Overlay::anchor), Some(b));

        let r1 = table.set_route(vec![a, b], 10.0);
        let r2 = table.set_route(vec![b, a], 20.0);
        assert_eq!(r1, r2);
        assert_eq!(table.route_layer(), Some(r1));
        assert_eq!(table.layers_in(LayerGroup::Route).count(), 1);
    }
}

// ── Surface ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod surface {
    use ap_core::SignalId;

    use super::helpers::fixture;
    use crate::MapSurface;

    #[test]
    fn popup_opens_only_on_drawn_marker() {
        let (_, table, mut map) = fixture(2);
        let handles = table.signal_layers(SignalId(1)).unwrap();

        map.open_popup(handles.marker);
        assert!(map.popups.is_empty());

        map.attach(handles.marker, table.overlay(handles.marker).unwrap());
        map.open_popup(handles.marker);
        assert_eq!(map.popups, vec![handles.marker]);
    }

    #[test]
    fn countdown_label_has_no_popup() {
        let (_, table, mut map) = fixture(1);
        let handles = table.signal_layers(SignalId(1)).unwrap();
        map.attach(handles.countdown, table.overlay(handles.countdown).unwrap());
        map.open_popup(handles.countdown);
        assert!(map.popups.is_empty());
    }
}

// ── VisibilityPolicy ───────────────────────────────────────────────────────────

#[cfg(test)]
mod visibility {
    use super::helpers::fixture;
    use crate::{LayerGroup, MapSurface, VisibilityPolicy};

    #[test]
    fn threshold_is_fifteen() {
        let p = VisibilityPolicy::default();
        assert!(!p.should_show_countdown(14));
        assert!(p.should_show_countdown(15));
        assert!(p.should_show_countdown(20));
        assert!(!p.should_show_countdown(0));
    }

    #[test]
    fn configurable_threshold() {
        let p = VisibilityPolicy::new(13);
        assert!(!p.should_show_countdown(12));
        assert!(p.should_show_countdown(13));
    }

    #[test]
    fn reconcile_attaches_then_detaches() {
        let (_, table, mut map) = fixture(5);
        let p = VisibilityPolicy::default();

        let r = p.reconcile(16, &table, &mut map);
        assert_eq!((r.attached, r.detached), (5, 0));
        for (layer, _) in table.layers_in(LayerGroup::Countdowns) {
            assert!(map.is_attached(layer));
        }

        let r = p.reconcile(12, &table, &mut map);
        assert_eq!((r.attached, r.detached), (0, 5));
        assert_eq!(map.attached_count(), 0);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let (_, table, mut map) = fixture(5);
        let p = VisibilityPolicy::default();

        p.reconcile(15, &table, &mut map);
        let calls = (map.attach_calls, map.detach_calls);
        assert!(p.reconcile(15, &table, &mut map).is_noop());
        assert!(p.reconcile(18, &table, &mut map).is_noop());
        assert_eq!((map.attach_calls, map.detach_calls), calls);

        p.reconcile(3, &table, &mut map);
        let calls = (map.attach_calls, map.detach_calls);
        assert!(p.reconcile(3, &table, &mut map).is_noop());
        assert_eq!((map.attach_calls, map.detach_calls), calls);
    }

    #[test]
    fn reconcile_leaves_other_groups_alone() {
        let (_, table, mut map) = fixture(2);
        let (marker, overlay) = table.layers_in(LayerGroup::SignalMarkers).next().unwrap();
        map.attach(marker, overlay);
        VisibilityPolicy::default().reconcile(10, &table, &mut map);
        assert!(map.is_attached(marker));
    }
}

// ── ModeSwitch ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mode {
    use super::helpers::fixture;
    use crate::{HeadlessMap, LayerGroup, LayerTable, MapSurface, ModeSwitch, OverlayMode};

    fn all_attached(table: &LayerTable, map: &HeadlessMap, group: LayerGroup) -> bool {
        table.layers_in(group).all(|(l, _)| map.is_attached(l))
    }

    fn none_attached(table: &LayerTable, map: &HeadlessMap, group: LayerGroup) -> bool {
        table.layers_in(group).all(|(l, _)| !map.is_attached(l))
    }

    #[test]
    fn density_then_signals() {
        let (_, table, mut map) = fixture(6);
        let mut switch = ModeSwitch::new();

        switch.set_mode(OverlayMode::Density, &table, &mut map);
        assert_eq!(switch.active(), OverlayMode::Density);
        assert!(all_attached(&table, &map, LayerGroup::DensityCircles));
        assert!(none_attached(&table, &map, LayerGroup::SignalMarkers));
        assert!(none_attached(&table, &map, LayerGroup::CrowdMarkers));

        switch.set_mode(OverlayMode::Signals, &table, &mut map);
        assert_eq!(switch.active(), OverlayMode::Signals);
        assert!(none_attached(&table, &map, LayerGroup::DensityCircles));
        assert!(all_attached(&table, &map, LayerGroup::SignalMarkers));
        assert!(none_attached(&table, &map, LayerGroup::CrowdMarkers));
    }

    #[test]
    fn crowd_mode_shows_only_hotspots() {
        let (_, table, mut map) = fixture(6);
        let mut switch = ModeSwitch::new();
        switch.set_mode(OverlayMode::Signals, &table, &mut map);
        let r = switch.set_mode(OverlayMode::Crowd, &table, &mut map);
        assert_eq!((r.attached, r.detached), (3, 6));
        assert!(all_attached(&table, &map, LayerGroup::CrowdMarkers));
        assert_eq!(map.attached_count(), 3);
    }

    #[test]
    fn set_mode_twice_is_set_mode_once() {
        for mode in OverlayMode::ALL {
            let (_, table, mut once) = fixture(4);
            let mut twice = once.clone();

            ModeSwitch::new().set_mode(mode, &table, &mut once);

            let mut switch = ModeSwitch::new();
            switch.set_mode(mode, &table, &mut twice);
            let calls = (twice.attach_calls, twice.detach_calls);
            assert!(switch.set_mode(mode, &table, &mut twice).is_noop());
            assert_eq!((twice.attach_calls, twice.detach_calls), calls);

            let a: Vec<_> = once.attached_layers().collect();
            let b: Vec<_> = twice.attached_layers().collect();
            assert_eq!(a, b, "mode {mode}");
        }
    }

    #[test]
    fn countdowns_survive_mode_changes() {
        let (_, table, mut map) = fixture(3);
        let (countdown, overlay) = table.layers_in(LayerGroup::Countdowns).next().unwrap();
        map.attach(countdown, overlay);
        let mut switch = ModeSwitch::new();
        for mode in OverlayMode::ALL {
            switch.set_mode(mode, &table, &mut map);
            assert!(map.is_attached(countdown));
        }
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Density".parse::<OverlayMode>(), Ok(OverlayMode::Density));
        assert_eq!(" crowd ".parse::<OverlayMode>(), Ok(OverlayMode::Crowd));
        assert!("traffic".parse::<OverlayMode>().is_err());
        assert_eq!(OverlayMode::Signals.to_string(), "signals");
        assert_eq!(OverlayMode::default(), OverlayMode::Signals);
    }
}
