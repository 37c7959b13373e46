//! Fluent builder for `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use sma_agent::{AgentStoreBuilder, SpawnMode};
//!
//! let store = AgentStoreBuilder::new(5_000, /*seed=*/ 42)
//!     .domain(500, 500)
//!     .spawn(SpawnMode::Ring)
//!     .build();
//!
//! assert_eq!(store.count, 5_000);
//! ```

use sma_core::{AgentId, AgentRng, DrawSite, Tick};

use crate::{AgentState, AgentStore, SpawnMode};

/// Fluent builder for [`AgentStore`].
///
/// Each agent's spawn draws come from its own tick-0 stream, so the layout
/// depends only on `(seed, agent)` and not on construction order.
pub struct AgentStoreBuilder {
    count:  usize,
    seed:   u64,
    width:  u32,
    height: u32,
    mode:   SpawnMode,
}

impl AgentStoreBuilder {
    /// Builder for `count` agents using `seed` as the global RNG seed.
    /// Defaults to a 500×500 domain and [`SpawnMode::Center`].
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            width:  500,
            height: 500,
            mode:   SpawnMode::default(),
        }
    }

    /// Domain the spawn layout is computed for.
    pub fn domain(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn spawn(mut self, mode: SpawnMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> AgentStore {
        let states = (0..self.count as u32).map(|i| {
            let mut rng = AgentRng::new(self.seed, AgentId(i), Tick::ZERO).stream(DrawSite::Spawn);
            let (position, heading) = self.mode.place(self.width, self.height, &mut rng);
            AgentState::new(position, heading)
        });
        AgentStore::from_states(states)
    }
}
