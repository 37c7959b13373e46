//! Unit tests for sma-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert!(AgentId(3) < AgentId(4));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec2;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let v = Vec2::new(9.0, 0.0);
        let r = v.rotated(0.0, 1.0);
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - 9.0).abs() < 1e-6);
    }

    #[test]
    fn heading_unit_vectors() {
        let east = Vec2::from_degrees(0.0);
        assert!((east.x - 1.0).abs() < 1e-6 && east.y.abs() < 1e-6);
        let south = Vec2::from_degrees(90.0);
        assert!(south.x.abs() < 1e-6 && (south.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scalar_ops() {
        let v = 2.0 * Vec2::new(1.0, -1.0) - Vec2::new(1.0, 1.0);
        assert_eq!(v, Vec2::new(1.0, -3.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{AnnealClock, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).next(), Tick(4));
    }

    #[test]
    fn anneal_clock_never_reaches_horizon() {
        let mut clock = AnnealClock::new(3);
        for _ in 0..10 {
            clock.advance();
            assert!(clock.iteration() < clock.max_iteration());
        }
        assert_eq!(clock.iteration(), 2);
    }

    #[test]
    fn zero_horizon_is_raised() {
        let mut clock = AnnealClock::new(0);
        assert_eq!(clock.max_iteration(), 1);
        clock.advance();
        assert_eq!(clock.iteration(), 0);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn reset_and_at() {
        let mut clock = AnnealClock::at(100, 40);
        assert!((clock.progress() - 0.4).abs() < 1e-6);
        clock.reset();
        assert_eq!(clock.iteration(), 0);
        assert_eq!(AnnealClock::at(10, 99).iteration(), 9);
    }
}

#[cfg(test)]
mod config {
    use crate::{DomainPreset, SimConfig, Tick};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
    }

    #[test]
    fn empty_domain_rejected() {
        let cfg = SimConfig { width: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_horizon_rejected() {
        let cfg = SimConfig { max_iteration: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn presets() {
        assert_eq!(DomainPreset::Mini.dimensions(), (500, 500, 5_000));
        assert_eq!(DomainPreset::Big.dimensions(), (1920, 1080, 1_000_000));
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{AgentId, AgentRng, DrawSite, Tick, hash_u32};

    #[test]
    fn hash_is_deterministic_and_mixing() {
        assert_eq!(hash_u32(1), hash_u32(1));
        assert_ne!(hash_u32(1), hash_u32(2));
    }

    #[test]
    fn same_key_same_stream() {
        let a = AgentRng::new(12345, AgentId(0), Tick(3));
        let b = AgentRng::new(12345, AgentId(0), Tick(3));
        let mut s1 = a.stream(DrawSite::Weight);
        let mut s2 = b.stream(DrawSite::Weight);
        for _ in 0..100 {
            let x: f32 = s1.r#gen();
            let y: f32 = s2.r#gen();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn key_components_all_matter() {
        let base = AgentRng::new(1, AgentId(0), Tick(0));
        assert_ne!(base, AgentRng::new(2, AgentId(0), Tick(0)));
        assert_ne!(base, AgentRng::new(1, AgentId(1), Tick(0)));
        assert_ne!(base, AgentRng::new(1, AgentId(0), Tick(1)));

        let mut w = base.stream(DrawSite::Weight);
        let mut s = base.stream(DrawSite::Steering);
        let a: u64 = w.r#gen();
        let b: u64 = s.r#gen();
        assert_ne!(a, b, "call sites should have independent streams");
    }

    #[test]
    fn unit_draws_in_range_and_spread() {
        let mut rng = AgentRng::new(7, AgentId(3), Tick(9)).stream(DrawSite::Explore);
        let mut sum = 0.0f64;
        for _ in 0..10_000 {
            let v: f32 = rng.r#gen();
            assert!((0.0..1.0).contains(&v));
            sum += v as f64;
        }
        let mean = sum / 10_000.0;
        assert!((mean - 0.5).abs() < 0.02, "mean {mean}");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0), Tick(0)).stream(DrawSite::PeerA);
        for _ in 0..1000 {
            let i = rng.gen_range(0..17usize);
            assert!(i < 17);
            let j = rng.gen_range(-20.0f32..=20.0);
            assert!((-20.0..=20.0).contains(&j));
        }
    }
}

#[cfg(test)]
mod stats {
    use crate::{PopulationStats, StatsContribution, Vec2};

    #[test]
    fn sentinels_before_first_observation() {
        let stats = PopulationStats::new();
        assert_eq!(stats.best_fitness(), None);
        assert_eq!(stats.worst_fitness(), None);
        assert_eq!(stats.best_food(), None);
        assert_eq!(stats.spread(), 0.0);
    }

    #[test]
    fn observe_is_min_max() {
        let mut stats = PopulationStats::new();
        for f in [5.0, 2.0, 9.0, 3.0] {
            stats.observe(f);
        }
        assert_eq!(stats.best_fitness(), Some(2.0));
        assert_eq!(stats.worst_fitness(), Some(9.0));
        stats.observe(f32::NAN);
        assert_eq!(stats.best_fitness(), Some(2.0));
    }

    #[test]
    fn merge_is_order_independent() {
        let mut a = StatsContribution::default();
        a.observe(4.0);
        a.record_best_food(Vec2::new(1.0, 1.0), 4.0);
        let mut b = StatsContribution::default();
        b.observe(2.0);
        b.observe(8.0);
        b.record_best_food(Vec2::new(5.0, 5.0), 2.0);
        let mut c = StatsContribution::default();
        c.record_best_food(Vec2::new(0.0, 9.0), 2.0);

        let left = a.merge(b).merge(c);
        let right = c.merge(a.merge(b));
        let swapped = b.merge(c).merge(a);
        assert_eq!(left, right);
        assert_eq!(left, swapped);
        // Tie at fitness 2.0 resolves on position ordering.
        assert_eq!(left.best_food().unwrap().position, Vec2::new(0.0, 9.0));
    }

    #[test]
    fn absorb_updates_running_record() {
        let mut stats = PopulationStats::new();
        let mut tick = StatsContribution::default();
        tick.observe(10.0);
        tick.observe(30.0);
        tick.record_best_food(Vec2::new(2.0, 3.0), 10.0);
        stats.absorb(tick);
        assert_eq!(stats.best_fitness(), Some(10.0));
        assert_eq!(stats.worst_fitness(), Some(30.0));
        assert_eq!(stats.best_food(), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(stats.spread(), 20.0);

        let mut later = StatsContribution::default();
        later.observe(20.0);
        later.record_best_food(Vec2::new(7.0, 7.0), 20.0);
        stats.absorb(later);
        // Running record keeps the extremes; best food follows the latest tick.
        assert_eq!(stats.best_fitness(), Some(10.0));
        assert_eq!(stats.best_food(), Some(Vec2::new(7.0, 7.0)));
    }

    #[test]
    fn empty_contribution_changes_nothing() {
        let mut stats = PopulationStats::new();
        stats.observe(3.0);
        let before = stats.clone();
        let empty = StatsContribution::default();
        assert!(empty.is_empty());
        stats.absorb(empty);
        assert_eq!(stats, before);
    }
}
