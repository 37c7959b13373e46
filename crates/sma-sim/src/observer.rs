//! Simulation observer trait for progress reporting and data collection.

use sma_agent::AgentStore;
use sma_core::Tick;
use sma_world::TrailField;

/// Aggregate view of one completed tick, returned by
/// [`Sim::advance`][crate::Sim::advance].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    pub tick:          Tick,
    /// Anneal iteration the tick ran with.
    pub iteration:     u64,
    pub food_count:    usize,
    /// Run-long best fitness after the tick, `None` before any observation.
    pub best_fitness:  Option<f32>,
    pub worst_fitness: Option<f32>,
    pub mean_weight:   f32,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with its summary.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to agents and the trail field.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _field: &TrailField) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _agents: &AgentStore) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
