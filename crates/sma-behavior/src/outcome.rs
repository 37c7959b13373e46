//! What one agent update asks the simulation to apply.

use sma_core::StatsContribution;

/// A buffered trail deposit, addressed by row-major cell index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Deposit {
    pub cell:   usize,
    pub amount: f32,
}

/// Side effects of one agent update, applied after the agent phase.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AgentOutcome {
    /// Target-capture marking at the agent's pre-move cell.
    pub capture: Option<Deposit>,

    /// Per-tick imprint at the agent's post-move cell.
    pub imprint: Option<Deposit>,

    /// This agent's fitness observations.
    pub stats: StatsContribution,
}

impl AgentOutcome {
    /// All deposits, capture first.
    pub fn deposits(&self) -> impl Iterator<Item = Deposit> {
        self.capture.into_iter().chain(self.imprint)
    }
}
