//! Core agent storage.
//!
//! The behaviour phase reads one agent at a time as an [`AgentState`] value
//! and returns the updated value; the simulation writes it back between
//! phases.  Keeping the arrays separate means the peer-position slice handed
//! to every agent is just `&store.positions`, with no copying.

use sma_core::{AgentId, Vec2};

use crate::Heading;

// ── AgentState ────────────────────────────────────────────────────────────────

/// One agent's full mutable state, gathered by value from the SoA arrays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentState {
    pub position: Vec2,
    pub heading:  Heading,
    /// Adaptive SMA weight.  0 while no food is present.
    pub weight:   f32,
    /// Current foraging target.
    pub target:   Vec2,
}

impl AgentState {
    /// Fresh agent at `position` facing `heading`, weight 0, targeting its
    /// own position.
    pub fn new(position: Vec2, heading: Heading) -> Self {
        Self { position, heading, weight: 0.0, target: position }
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub positions: Vec<Vec2>,

    pub headings: Vec<Heading>,

    pub weights: Vec<f32>,

    pub targets: Vec<Vec2>,
}

impl AgentStore {
    /// Store holding exactly `states`, in order.
    pub fn from_states(states: impl IntoIterator<Item = AgentState>) -> Self {
        let mut store = Self::default();
        for state in states {
            store.push(state);
        }
        store
    }

    fn push(&mut self, state: AgentState) {
        self.positions.push(state.position);
        self.headings.push(state.heading);
        self.weights.push(state.weight);
        self.targets.push(state.target);
        self.count += 1;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Gather one agent's state.  Panics if `agent` is out of range.
    #[inline]
    pub fn state(&self, agent: AgentId) -> AgentState {
        let i = agent.index();
        AgentState {
            position: self.positions[i],
            heading:  self.headings[i],
            weight:   self.weights[i],
            target:   self.targets[i],
        }
    }

    /// Scatter one agent's state back into the arrays.
    #[inline]
    pub fn set_state(&mut self, agent: AgentId, state: AgentState) {
        let i = agent.index();
        self.positions[i] = state.position;
        self.headings[i] = state.heading;
        self.weights[i] = state.weight;
        self.targets[i] = state.target;
    }

    /// Iterator over every agent's state in index order.
    pub fn states(&self) -> impl Iterator<Item = AgentState> + '_ {
        self.agent_ids().map(move |id| self.state(id))
    }

    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Arithmetic mean of all weights, 0 for an empty store.
    pub fn mean_weight(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let sum: f64 = self.weights.iter().map(|&w| w as f64).sum();
        (sum / self.count as f64) as f32
    }
}
