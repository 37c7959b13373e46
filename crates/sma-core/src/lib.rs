//! `sma-core`: foundational types for the `rust_sma` foraging simulation.
//!
//! This crate is a dependency of every other `sma-*` crate.  It has no
//! `sma-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                                 |
//! | [`geo`]         | `Vec2`, euclidean distance, heading rotation              |
//! | [`time`]        | `Tick`, `AnnealClock`                                     |
//! | [`config`]      | `SimConfig`, `BoundaryPolicy`, `AnnealPolicy`, `DomainPreset` |
//! | [`rng`]         | `hash_u32`, `AgentRng` (per agent+tick key), `HashRng`    |
//! | [`stats`]       | `PopulationStats`, `StatsContribution`                    |
//! | [`error`]       | `SmaError`, `SmaResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and geometry.     |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod stats;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AnnealPolicy, BoundaryPolicy, DomainPreset, SimConfig};
pub use error::{SmaError, SmaResult};
pub use geo::Vec2;
pub use ids::AgentId;
pub use rng::{AgentRng, DrawSite, HashRng, hash_u32};
pub use stats::{FoodCandidate, PopulationStats, StatsContribution};
pub use time::{AnnealClock, Tick};
