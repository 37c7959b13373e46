//! `sma-sim`: tick loop orchestrator for the rust_sma simulation.
//!
//! # Two-phase tick
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Agents:    BehaviorModel::update for every agent against one frozen
//!                 TickContext (parallel with the `parallel` feature).
//!   ② Apply:     write back states; add buffered deposits to the field.
//!   ③ Diffuse:   TrailField::tick (decay + blur), exactly once.
//!   ④ Stats:     merge per-agent contributions into PopulationStats.
//!   ⑤ Anneal:    advance (or reset) the anneal clock.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the agent phase on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sma_agent::{AgentStoreBuilder, SpawnMode};
//! use sma_behavior::SlimeMouldBehavior;
//! use sma_core::SimConfig;
//! use sma_sim::{NoopObserver, SimBuilder};
//!
//! let agents = AgentStoreBuilder::new(5_000, 42).domain(500, 500).spawn(SpawnMode::Ring).build();
//! let mut sim = SimBuilder::new(config, agents, SlimeMouldBehavior::default()).build()?;
//! sim.add_food(Vec2::new(250.0, 120.0));
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::Sim;
