//! The `BehaviorModel` trait: the extension point for agent rules.

use sma_agent::AgentState;
use sma_core::{AgentId, AgentRng};

use crate::{AgentOutcome, TickContext};

/// Pluggable agent behavior.
///
/// `update` receives the agent's state by value together with a read-only
/// [`TickContext`] and a per-(agent, tick) [`AgentRng`] key, and returns the
/// new state plus the side effects to apply.  Because randomness is keyed
/// rather than carried, the result does not depend on which thread runs the
/// update or in which order agents are visited.
///
/// # Thread safety
///
/// The simulation may call `update` for many agents in parallel via Rayon,
/// so implementations must be `Send + Sync` and keep no per-agent state.
pub trait BehaviorModel: Send + Sync + 'static {
    fn update(
        &self,
        agent: AgentId,
        state: AgentState,
        ctx:   &TickContext<'_>,
        rng:   AgentRng,
    ) -> (AgentState, AgentOutcome);
}
