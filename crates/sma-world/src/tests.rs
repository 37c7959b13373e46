//! Unit tests for sma-world.

#[cfg(test)]
mod trail {
    use sma_core::Vec2;

    use crate::{BLUR_KERNEL, TrailField, TrailParams};

    fn field(w: u32, h: u32) -> TrailField {
        TrailField::new(w, h, TrailParams::default()).unwrap()
    }

    #[test]
    fn kernel_is_symmetric_and_normalised() {
        let n = BLUR_KERNEL.len();
        for i in 0..n / 2 {
            assert_eq!(BLUR_KERNEL[i], BLUR_KERNEL[n - 1 - i]);
        }
        let sum: f32 = BLUR_KERNEL.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5, "sum {sum}");
    }

    #[test]
    fn rejects_empty_or_bad_params() {
        assert!(TrailField::new(0, 10, TrailParams::default()).is_err());
        let bad = TrailParams { decay_rate: 1.5, ..TrailParams::default() };
        assert!(TrailField::new(10, 10, bad).is_err());
        let bad = TrailParams { max_intensity: 0.0, ..TrailParams::default() };
        assert!(TrailField::new(10, 10, bad).is_err());
    }

    #[test]
    fn deposit_then_sample_reflects_increase() {
        let mut f = field(10, 10);
        let p = Vec2::new(3.4, 7.9);
        assert_eq!(f.sample(p), 0.0);
        f.deposit(p, 50.0);
        assert_eq!(f.sample(p), 50.0);
        assert_eq!(f.get(3, 7), 50.0);
    }

    #[test]
    fn deposit_saturates_at_max() {
        let mut f = field(4, 4);
        let p = Vec2::new(1.0, 1.0);
        for _ in 0..10 {
            f.deposit(p, 50.0);
        }
        assert_eq!(f.sample(p), 255.0);
        f.deposit(p, f32::MAX);
        assert_eq!(f.sample(p), 255.0);
    }

    #[test]
    fn negative_and_nan_deposits_ignored() {
        let mut f = field(4, 4);
        let p = Vec2::new(2.0, 2.0);
        f.deposit(p, 10.0);
        f.deposit(p, -5.0);
        f.deposit(p, f32::NAN);
        assert_eq!(f.sample(p), 10.0);
    }

    #[test]
    fn out_of_bounds_coordinates_clamp() {
        let mut f = field(5, 5);
        f.deposit(Vec2::new(-10.0, 99.0), 20.0);
        assert_eq!(f.get(0, 4), 20.0);
        assert_eq!(f.sample(Vec2::new(-1.0, 1e9)), 20.0);
        assert_eq!(f.cell_of(Vec2::new(f32::NAN, 2.5)), (0, 2));
    }

    #[test]
    fn tick_without_deposits_decays_and_stays_bounded() {
        let mut f = field(32, 24);
        for (i, p) in [(3.0, 3.0), (10.0, 12.0), (31.0, 23.0), (16.0, 0.0)].iter().enumerate() {
            f.deposit(Vec2::new(p.0, p.1), 40.0 * (i as f32 + 1.0));
        }
        let mut peak = f.peak();
        for _ in 0..50 {
            f.tick();
            let next = f.peak();
            assert!(next <= peak, "peak grew from {peak} to {next}");
            assert!(f.cells().iter().all(|&c| c >= 0.0 && c <= f.max_intensity()));
            peak = next;
        }
    }

    #[test]
    fn uniform_field_decays_per_cell() {
        let mut f = field(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                f.deposit(Vec2::new(x as f32, y as f32), 100.0);
            }
        }
        let before: Vec<f32> = f.cells().to_vec();
        f.tick();
        for (b, a) in before.iter().zip(f.cells()) {
            assert!(*a <= *b);
            assert!((a - b * 0.97).abs() < 1e-3, "expected {} got {a}", b * 0.97);
        }
    }

    #[test]
    fn blur_spreads_to_neighbours() {
        let mut f = field(21, 21);
        f.deposit(Vec2::new(10.0, 10.0), 200.0);
        f.tick();
        assert!(f.get(11, 10) > 0.0);
        assert!(f.get(10, 11) > 0.0);
        assert!(f.get(11, 11) > 0.0, "separable passes reach diagonals");
        assert!(f.get(10, 10) < 200.0 * 0.97);
        // Symmetric kernel: symmetric spread.
        assert!((f.get(9, 10) - f.get(11, 10)).abs() < 1e-4);
        assert!((f.get(10, 9) - f.get(10, 11)).abs() < 1e-4);
        // Beyond the kernel radius nothing arrives.
        assert_eq!(f.get(0, 10), 0.0);
    }

    #[test]
    fn zero_diffusion_is_pure_decay() {
        let params = TrailParams { diffusion: 0.0, ..TrailParams::default() };
        let mut f = TrailField::new(5, 5, params).unwrap();
        f.deposit(Vec2::new(2.0, 2.0), 100.0);
        f.tick();
        assert!((f.get(2, 2) - 97.0).abs() < 1e-4);
        assert_eq!(f.get(1, 2), 0.0);
    }
}

#[cfg(test)]
mod food {
    use sma_core::Vec2;

    use crate::FoodSet;
    use crate::food::DEFAULT_REMOVE_RADIUS;

    #[test]
    fn add_and_remove_nearest() {
        let mut food: FoodSet = [Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0)]
            .into_iter()
            .collect();
        assert_eq!(food.len(), 2);

        assert_eq!(food.remove_nearest(Vec2::new(50.0, 50.0), DEFAULT_REMOVE_RADIUS), None);
        let removed = food.remove_nearest(Vec2::new(95.0, 98.0), DEFAULT_REMOVE_RADIUS);
        assert_eq!(removed, Some(Vec2::new(100.0, 100.0)));
        assert_eq!(food.positions(), &[Vec2::new(10.0, 10.0)]);
    }

    #[test]
    fn empty_set_behaviour() {
        let mut food = FoodSet::new();
        assert!(food.is_empty());
        assert_eq!(food.remove_nearest(Vec2::ZERO, 1e9), None);
        food.add(Vec2::new(f32::NAN, 0.0));
        assert!(food.is_empty(), "non-finite food is rejected");
        food.add(Vec2::new(1.0, 1.0));
        food.clear();
        assert!(food.is_empty());
    }
}

#[cfg(test)]
mod obstacle {
    use sma_core::Vec2;

    use crate::{ObstacleGrid, ObstacleMap};

    const MAZE: &str = "\
        1111\n\
        1001\n\
        1011\n\
        1111\n";

    #[test]
    fn parse_and_query() {
        let grid = ObstacleGrid::parse(10.0, MAZE).unwrap();
        assert_eq!((grid.cols(), grid.rows()), (4, 4));
        assert_eq!(grid.blocked_count(), 13);
        assert!(!grid.is_blocked(Vec2::new(15.0, 15.0)));
        assert!(!grid.is_blocked(Vec2::new(25.0, 15.0)));
        assert!(grid.is_blocked(Vec2::new(25.0, 25.0)));
        assert!(grid.is_blocked(Vec2::new(5.0, 15.0)));
    }

    #[test]
    fn outside_grid_is_solid() {
        let grid = ObstacleGrid::new(5.0, 2, 2, &[0, 0, 0, 0]).unwrap();
        assert!(!grid.is_blocked(Vec2::new(1.0, 1.0)));
        assert!(grid.is_blocked(Vec2::new(-0.5, 1.0)));
        assert!(grid.is_blocked(Vec2::new(1.0, 10.0)));
    }

    #[test]
    fn ragged_rows_rejected() {
        assert!(ObstacleGrid::parse(10.0, "101\n10\n").is_err());
        assert!(ObstacleGrid::parse(10.0, "10x\n").is_err());
        assert!(ObstacleGrid::new(0.0, 1, 1, &[0]).is_err());
        assert!(ObstacleGrid::new(1.0, 2, 2, &[0]).is_err());
    }
}
