//! `sma-world`: the shared environment agents live in.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`trail`]     | `TrailField` pheromone grid (sample, deposit, decay+blur)   |
//! | [`blur`]      | `BLUR_KERNEL`, the two separable blur passes                |
//! | [`food`]      | `FoodSet`: controller-owned list of food positions          |
//! | [`obstacle`]  | `ObstacleMap` capability, `ObstacleGrid` implementation     |
//! | [`error`]     | `WorldError`, `WorldResult<T>`                              |
//!
//! Everything here is read-only during the agent phase of a tick; the
//! simulation mutates it only between agent phases.

pub mod blur;
pub mod error;
pub mod food;
pub mod obstacle;
pub mod trail;

#[cfg(test)]
mod tests;

pub use blur::BLUR_KERNEL;
pub use error::{WorldError, WorldResult};
pub use food::FoodSet;
pub use obstacle::{ObstacleGrid, ObstacleMap};
pub use trail::{TrailField, TrailParams};
