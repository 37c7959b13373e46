//! Population-wide fitness statistics.
//!
//! # Two types
//!
//! [`PopulationStats`] is the run-long record every agent reads: the best
//! (minimum) and worst (maximum) fitness ever observed and the position of
//! the food that was globally nearest to any agent on the last tick with
//! observations.
//!
//! [`StatsContribution`] is the tick-scoped accumulator agents write to.
//! Each agent produces its own contribution during the (possibly parallel)
//! update phase; contributions are folded with [`StatsContribution::merge`]
//! and applied once with [`PopulationStats::absorb`].  `merge` is
//! commutative and associative, so the result is independent of how Rayon
//! splits the work.

use std::cmp::Ordering;

use crate::Vec2;

// ── FoodCandidate ─────────────────────────────────────────────────────────────

/// A food position together with the distance at which it was observed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FoodCandidate {
    pub position: Vec2,
    pub fitness: f32,
}

impl FoodCandidate {
    /// Nearer wins; exact ties resolve on position so the choice does not
    /// depend on merge order.
    fn better(self, other: FoodCandidate) -> FoodCandidate {
        match self.fitness.total_cmp(&other.fitness) {
            Ordering::Less => self,
            Ordering::Greater => other,
            Ordering::Equal => {
                if self.position.total_cmp(&other.position) == Ordering::Greater {
                    other
                } else {
                    self
                }
            }
        }
    }
}

// ── StatsContribution ─────────────────────────────────────────────────────────

/// Fitness observations gathered during one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StatsContribution {
    best: f32,
    worst: f32,
    best_food: Option<FoodCandidate>,
    observations: u64,
}

impl Default for StatsContribution {
    fn default() -> Self {
        Self {
            best: f32::INFINITY,
            worst: f32::NEG_INFINITY,
            best_food: None,
            observations: 0,
        }
    }
}

impl StatsContribution {
    /// Record one agent→food distance.  Non-finite values are ignored.
    #[inline]
    pub fn observe(&mut self, fitness: f32) {
        if !fitness.is_finite() {
            return;
        }
        self.best = self.best.min(fitness);
        self.worst = self.worst.max(fitness);
        self.observations += 1;
    }

    /// Offer a food position as this tick's globally nearest food.
    #[inline]
    pub fn record_best_food(&mut self, position: Vec2, fitness: f32) {
        if !fitness.is_finite() {
            return;
        }
        let candidate = FoodCandidate { position, fitness };
        self.best_food = Some(match self.best_food {
            Some(current) => current.better(candidate),
            None => candidate,
        });
    }

    /// Combine two contributions (commutative, associative).
    pub fn merge(self, other: StatsContribution) -> StatsContribution {
        let best_food = match (self.best_food, other.best_food) {
            (Some(a), Some(b)) => Some(a.better(b)),
            (a, b) => a.or(b),
        };
        StatsContribution {
            best: self.best.min(other.best),
            worst: self.worst.max(other.worst),
            best_food,
            observations: self.observations + other.observations,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations == 0 && self.best_food.is_none()
    }

    #[inline]
    pub fn observations(&self) -> u64 {
        self.observations
    }

    #[inline]
    pub fn best_food(&self) -> Option<FoodCandidate> {
        self.best_food
    }
}

// ── PopulationStats ───────────────────────────────────────────────────────────

/// Running best/worst fitness and the current best food.
///
/// Sentinels until the first observation: best `+∞`, worst `-∞`, no food.
#[derive(Clone, Debug, PartialEq)]
pub struct PopulationStats {
    best_fitness: f32,
    worst_fitness: f32,
    best_food: Option<FoodCandidate>,
}

impl Default for PopulationStats {
    fn default() -> Self {
        Self::new()
    }
}

impl PopulationStats {
    pub fn new() -> Self {
        Self {
            best_fitness: f32::INFINITY,
            worst_fitness: f32::NEG_INFINITY,
            best_food: None,
        }
    }

    /// Commutative min/max update with a single fitness sample.
    #[inline]
    pub fn observe(&mut self, fitness: f32) {
        if !fitness.is_finite() {
            return;
        }
        self.best_fitness = self.best_fitness.min(fitness);
        self.worst_fitness = self.worst_fitness.max(fitness);
    }

    /// Fold one tick's merged contribution into the running record.
    ///
    /// The best food is replaced by the tick's nearest food, so a food that
    /// has since been removed stops attracting agents after one tick.
    pub fn absorb(&mut self, tick: StatsContribution) {
        if tick.observations > 0 {
            self.observe(tick.best);
            self.observe(tick.worst);
        }
        if let Some(food) = tick.best_food {
            self.best_food = Some(food);
        }
    }

    /// Minimum fitness ever observed, or `None` before the first sample.
    #[inline]
    pub fn best_fitness(&self) -> Option<f32> {
        self.best_fitness.is_finite().then_some(self.best_fitness)
    }

    /// Maximum fitness ever observed, or `None` before the first sample.
    #[inline]
    pub fn worst_fitness(&self) -> Option<f32> {
        self.worst_fitness.is_finite().then_some(self.worst_fitness)
    }

    /// Raw best with the `+∞` sentinel, for `min` folding.
    #[inline]
    pub fn best_or_sentinel(&self) -> f32 {
        self.best_fitness
    }

    /// Raw worst with the `-∞` sentinel, for `max` folding.
    #[inline]
    pub fn worst_or_sentinel(&self) -> f32 {
        self.worst_fitness
    }

    #[inline]
    pub fn best_food(&self) -> Option<Vec2> {
        self.best_food.map(|f| f.position)
    }

    /// `worst - best`, or `0.0` before the first sample.
    pub fn spread(&self) -> f32 {
        match (self.best_fitness(), self.worst_fitness()) {
            (Some(best), Some(worst)) => worst - best,
            _ => 0.0,
        }
    }
}
