//! The `Sim` struct and its tick loop.

use sma_agent::{AgentState, AgentStore};
use sma_behavior::{AgentOutcome, BehaviorModel, TickContext};
use sma_core::{
    AgentId, AgentRng, AnnealClock, AnnealPolicy, PopulationStats, SimConfig, StatsContribution, Tick, Vec2,
};
use sma_world::{FoodSet, ObstacleMap, TrailField};
use tracing::{debug, info, trace};

use crate::{SimObserver, SimResult, TickSummary};

/// The main simulation runner.
///
/// `Sim<B>` owns all simulation state and drives the two-phase tick:
///
/// 1. **Agent phase** (optionally parallel with the `parallel` feature):
///    every agent runs [`BehaviorModel::update`] against a [`TickContext`]
///    that borrows the field, food, stats and peer positions immutably.
/// 2. **Apply phase** (sequential): new states are written back, buffered
///    deposits are added to the field with saturation, the field decays and
///    diffuses once, stats contributions are merged and the anneal clock
///    moves.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    pub config: SimConfig,

    /// The next tick to execute.
    pub clock: Tick,

    /// Exploration schedule; bounded by `config.max_iteration`.
    pub anneal: AnnealClock,

    pub agents: AgentStore,

    pub field: TrailField,

    /// Active food.  Controller-owned: change it only between ticks.
    pub food: FoodSet,

    pub stats: PopulationStats,

    pub behavior: B,

    pub obstacles: Option<Box<dyn ObstacleMap>>,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let start = self.clock;
        while self.clock < self.config.end_tick() {
            self.step_observed(observer);
        }
        info!(
            start = %start,
            end = %self.clock,
            best = ?self.stats.best_fitness(),
            mean_weight = self.agents.mean_weight(),
            "simulation finished"
        );
        observer.on_sim_end(self.clock, &self.agents);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(observer);
        }
        Ok(())
    }

    /// Execute one tick and return its summary.
    pub fn advance(&mut self) -> TickSummary {
        let now = self.clock;
        let iteration = self.anneal.iteration();

        // ── Agent phase ───────────────────────────────────────────────────
        let results = self.agent_phase(now);

        // ── Apply phase ───────────────────────────────────────────────────
        //
        // Writes happen in ascending AgentId order; saturating adds commute
        // up to the cap, so the order does not change the field.
        for (i, (state, outcome)) in results.iter().enumerate() {
            self.agents.set_state(AgentId(i as u32), *state);
            for deposit in outcome.deposits() {
                self.field.deposit_cell(deposit.cell, deposit.amount);
            }
        }
        self.field.tick();

        let merged = merge_contributions(&results);
        self.stats.absorb(merged);

        match self.config.anneal {
            AnnealPolicy::Always => self.anneal.advance(),
            AnnealPolicy::WhileFoodPresent if self.food.is_empty() => self.anneal.reset(),
            AnnealPolicy::WhileFoodPresent => self.anneal.advance(),
        }
        self.clock = now.next();

        let summary = TickSummary {
            tick:          now,
            iteration,
            food_count:    self.food.len(),
            best_fitness:  self.stats.best_fitness(),
            worst_fitness: self.stats.worst_fitness(),
            mean_weight:   self.agents.mean_weight(),
        };
        trace!(
            tick = %summary.tick,
            iteration = summary.iteration,
            food = summary.food_count,
            best = ?summary.best_fitness,
            mean_weight = summary.mean_weight,
            "tick complete"
        );
        summary
    }

    // ── Food controller ───────────────────────────────────────────────────

    pub fn add_food(&mut self, position: Vec2) {
        self.food.add(position);
        debug!(%position, count = self.food.len(), "food added");
    }

    /// Remove the food nearest `near` within `radius`, returning it.
    pub fn remove_food_near(&mut self, near: Vec2, radius: f32) -> Option<Vec2> {
        let removed = self.food.remove_nearest(near, radius);
        if let Some(position) = removed {
            debug!(%position, count = self.food.len(), "food removed");
        }
        removed
    }

    pub fn clear_food(&mut self) {
        self.food.clear();
        debug!("food cleared");
    }

    /// Mutable access for bulk edits between ticks.
    #[inline]
    pub fn food_mut(&mut self) -> &mut FoodSet {
        &mut self.food
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        self.agents.positions()
    }

    #[inline]
    pub fn weights(&self) -> &[f32] {
        self.agents.weights()
    }

    #[inline]
    pub fn best_food(&self) -> Option<Vec2> {
        self.stats.best_food()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock;
        observer.on_tick_start(now);
        let summary = self.advance();
        observer.on_tick_end(&summary);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents, &self.field);
        }
    }

    /// Update every agent against the frozen pre-tick state.
    ///
    /// With the `parallel` Cargo feature the updates run on Rayon's thread
    /// pool.  Each agent's randomness is keyed by `(seed, agent, tick)`, so
    /// both paths produce identical results.
    fn agent_phase(&self, now: Tick) -> Vec<(AgentState, AgentOutcome)> {
        let agents   = &self.agents;
        let behavior = &self.behavior;
        let seed     = self.config.seed;

        let ctx = TickContext::new(now, seed, &self.field, &self.food, &self.stats, agents.positions(), self.anneal)
            .with_boundary(self.config.boundary)
            .with_obstacles(self.obstacles.as_deref());

        let update = |agent: AgentId| {
            behavior.update(agent, agents.state(agent), &ctx, AgentRng::new(seed, agent, now))
        };

        #[cfg(not(feature = "parallel"))]
        {
            agents.agent_ids().map(update).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            (0..agents.count as u32)
                .into_par_iter()
                .map(AgentId)
                .map(update)
                .collect()
        }
    }
}

/// Fold every agent's stats contribution.  `merge` is commutative and
/// associative, so Rayon's split points do not affect the result.
pub(crate) fn merge_contributions(results: &[(AgentState, AgentOutcome)]) -> StatsContribution {
    #[cfg(not(feature = "parallel"))]
    {
        results
            .iter()
            .map(|(_, outcome)| outcome.stats)
            .fold(StatsContribution::default(), StatsContribution::merge)
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        results
            .par_iter()
            .map(|(_, outcome)| outcome.stats)
            .reduce(StatsContribution::default, StatsContribution::merge)
    }
}
