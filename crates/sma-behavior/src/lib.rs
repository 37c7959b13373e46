//! `sma-behavior`: the per-agent update and the types around it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`params`]  | `ForageParams`: every tunable constant of the agent update       |
//! | [`sensor`]  | `SensorRig`: precomputed forward/left/right sensor offsets       |
//! | [`context`] | `TickContext<'a>`: read-only tick snapshot shared by all agents  |
//! | [`outcome`] | `AgentOutcome`, `Deposit`: what one agent asks the sim to apply  |
//! | [`model`]   | `BehaviorModel` trait                                            |
//! | [`forage`]  | `SlimeMouldBehavior`: trail following + SMA weighting            |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! The tick loop in sma-sim works in two phases:
//!
//! 1. **Agent phase** (parallel): every agent is updated against the same
//!    `&TickContext`.  Updates return the new `AgentState` and an
//!    `AgentOutcome` by value; nothing shared is written.
//!
//! 2. **Apply phase** (sequential): states are written back, deposits are
//!    added to the trail field and stat contributions are merged.
//!
//! This split means `BehaviorModel` only needs to be `Send + Sync`.

pub mod context;
pub mod error;
pub mod forage;
pub mod model;
pub mod outcome;
pub mod params;
pub mod sensor;


pub use context::TickContext;
pub use error::{BehaviorError, BehaviorResult};
pub use forage::SlimeMouldBehavior;
pub use model::BehaviorModel;
pub use outcome::{AgentOutcome, Deposit};
pub use params::ForageParams;
pub use sensor::{SensorPoints, SensorRig};
