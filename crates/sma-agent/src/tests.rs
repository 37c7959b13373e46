//! Unit tests for sma-agent.

#[cfg(test)]
mod heading {
    use crate::{Heading, normalize_degrees};

    #[test]
    fn normalizes_into_range() {
        for raw in [-720.5_f32, -360.0, -22.5, -1e-7, 0.0, 45.0, 359.99, 360.0, 725.0, 1e6] {
            let h = normalize_degrees(raw);
            assert!((0.0..360.0).contains(&h), "{raw} -> {h}");
        }
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(f32::NAN), 0.0);
        assert_eq!(normalize_degrees(f32::INFINITY), 0.0);
    }

    #[test]
    fn cached_trig_matches_degrees() {
        let h = Heading::new(90.0);
        assert!(h.cos().abs() < 1e-6);
        assert!((h.sin() - 1.0).abs() < 1e-6);

        let turned = h.turned(-180.0);
        assert!((turned.degrees() - 270.0).abs() < 1e-4);
        assert!((turned.sin() + 1.0).abs() < 1e-6);
        assert!((turned.direction().length() - 1.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod store {
    use sma_core::{AgentId, Vec2};

    use crate::{AgentState, AgentStore, Heading};

    fn sample() -> AgentStore {
        AgentStore::from_states([
            AgentState::new(Vec2::new(1.0, 2.0), Heading::new(0.0)),
            AgentState::new(Vec2::new(3.0, 4.0), Heading::new(90.0)),
        ])
    }

    #[test]
    fn arrays_stay_aligned() {
        let store = sample();
        assert_eq!(store.count, 2);
        assert_eq!(store.positions.len(), 2);
        assert_eq!(store.headings.len(), 2);
        assert_eq!(store.weights.len(), 2);
        assert_eq!(store.targets.len(), 2);
        assert_eq!(store.agent_ids().collect::<Vec<_>>(), vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn state_round_trips_through_arrays() {
        let mut store = sample();
        let mut s = store.state(AgentId(1));
        assert_eq!(s.target, s.position, "fresh agents target themselves");
        s.weight = 0.75;
        s.position = Vec2::new(9.0, 9.0);
        store.set_state(AgentId(1), s);
        assert_eq!(store.state(AgentId(1)), s);
        assert_eq!(store.state(AgentId(0)).weight, 0.0);
        assert_eq!(store.states().count(), 2);
    }

    #[test]
    fn mean_weight() {
        let mut store = sample();
        assert_eq!(store.mean_weight(), 0.0);
        store.weights[0] = 1.0;
        store.weights[1] = 0.5;
        assert!((store.mean_weight() - 0.75).abs() < 1e-6);
        assert_eq!(AgentStore::default().mean_weight(), 0.0);
    }
}

#[cfg(test)]
mod spawn {
    use sma_core::HashRng;

    use crate::{AgentStoreBuilder, SpawnMode};

    const MODES: [SpawnMode; 5] = [
        SpawnMode::Noise,
        SpawnMode::Ring,
        SpawnMode::Center,
        SpawnMode::TwoPoints,
        SpawnMode::ThreePoints,
    ];

    #[test]
    fn every_mode_spawns_inside_domain() {
        for mode in MODES {
            let mut rng = HashRng::from_seed(11);
            for _ in 0..500 {
                let (p, h) = mode.place(640, 480, &mut rng);
                assert!((0.0..640.0).contains(&p.x) && (0.0..480.0).contains(&p.y), "{mode:?} {p}");
                assert!((0.0..360.0).contains(&h.degrees()));
            }
        }
    }

    #[test]
    fn ring_faces_centre() {
        let mut rng = HashRng::from_seed(3);
        for _ in 0..100 {
            let (p, h) = SpawnMode::Ring.place(500, 500, &mut rng);
            let to_centre = sma_core::Vec2::new(250.0, 250.0) - p;
            if to_centre.length() < 1.0 {
                continue;
            }
            let dot = h.cos() * to_centre.x + h.sin() * to_centre.y;
            assert!((dot - to_centre.length()).abs() < 1e-2);
            assert!(to_centre.length() <= 200.0 + 1e-3);
        }
    }

    #[test]
    fn cluster_modes_use_fixed_sites() {
        let mut rng = HashRng::from_seed(5);
        for _ in 0..200 {
            let (p, _) = SpawnMode::TwoPoints.place(300, 200, &mut rng);
            assert!(p.y == 100.0 && (p.x == 100.0 || p.x == 200.0));
            let (p, _) = SpawnMode::Center.place(300, 200, &mut rng);
            assert_eq!((p.x, p.y), (150.0, 100.0));
        }
    }

    #[test]
    fn builder_is_deterministic_per_seed() {
        let a = AgentStoreBuilder::new(64, 7).domain(100, 80).spawn(SpawnMode::Noise).build();
        let b = AgentStoreBuilder::new(64, 7).domain(100, 80).spawn(SpawnMode::Noise).build();
        let c = AgentStoreBuilder::new(64, 8).domain(100, 80).spawn(SpawnMode::Noise).build();
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.headings, b.headings);
        assert_ne!(a.positions, c.positions);
        assert!(a.weights.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn builder_prefix_is_stable() {
        let small = AgentStoreBuilder::new(10, 1).spawn(SpawnMode::Ring).build();
        let large = AgentStoreBuilder::new(100, 1).spawn(SpawnMode::Ring).build();
        assert_eq!(small.positions[..], large.positions[..10]);
    }
}
