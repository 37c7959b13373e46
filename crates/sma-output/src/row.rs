//! Plain data row types written by output backends.

use sma_agent::AgentStore;
use sma_sim::TickSummary;

/// One agent's exported state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentRow {
    pub x:      f32,
    pub y:      f32,
    pub weight: f32,
}

impl AgentRow {
    /// One row per agent, in `AgentId` order.
    pub fn from_store(agents: &AgentStore) -> Vec<AgentRow> {
        agents
            .positions
            .iter()
            .zip(&agents.weights)
            .map(|(p, &weight)| AgentRow { x: p.x, y: p.y, weight })
            .collect()
    }
}

/// Aggregate statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub iteration:     u64,
    pub food_count:    u64,
    /// `None` before the first fitness observation; written as an empty field.
    pub best_fitness:  Option<f32>,
    pub worst_fitness: Option<f32>,
    pub mean_weight:   f32,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:          s.tick.0,
            iteration:     s.iteration,
            food_count:    s.food_count as u64,
            best_fitness:  s.best_fitness,
            worst_fitness: s.worst_fitness,
            mean_weight:   s.mean_weight,
        }
    }
}
