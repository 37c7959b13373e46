//! `sma-agent`: Structure-of-Arrays agent storage for the `rust_sma`
//! foraging simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`heading`]   | `Heading` (degrees with cached cos/sin), `normalize_degrees` |
//! | [`store`]     | `AgentStore` (SoA arrays), `AgentState` (one agent by value) |
//! | [`spawn`]     | `SpawnMode` initial layouts                               |
//! | [`builder`]   | `AgentStoreBuilder` (fluent construction)                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `SpawnMode`.          |

pub mod builder;
pub mod heading;
pub mod spawn;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use heading::{Heading, normalize_degrees};
pub use spawn::SpawnMode;
pub use store::{AgentState, AgentStore};
