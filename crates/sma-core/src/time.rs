//! Simulation time: the tick counter and the anneal clock.
//!
//! `Tick` counts every executed step and keys the random streams.
//! `AnnealClock` is the separate iteration counter that drives the
//! exploration schedule; it is bounded by `max_iteration` and, depending on
//! [`AnnealPolicy`](crate::AnnealPolicy), may pause or reset while no food is
//! present.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── AnnealClock ───────────────────────────────────────────────────────────────

/// Iteration counter for the exploration → exploitation schedule.
///
/// Invariant: `iteration < max_iteration`.  [`advance`](Self::advance)
/// saturates at `max_iteration - 1` so the schedule's `atanh` term is never
/// evaluated at the end of the horizon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnnealClock {
    iteration: u64,
    max_iteration: u64,
}

impl AnnealClock {
    /// Clock at iteration 0.  A zero horizon is raised to 1.
    pub fn new(max_iteration: u64) -> Self {
        Self { iteration: 0, max_iteration: max_iteration.max(1) }
    }

    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    #[inline]
    pub fn max_iteration(&self) -> u64 {
        self.max_iteration
    }

    /// `iteration / max_iteration` in `[0, 1)`.
    #[inline]
    pub fn progress(&self) -> f32 {
        (self.iteration as f64 / self.max_iteration as f64) as f32
    }

    /// Advance by one, clamped to `max_iteration - 1`.
    #[inline]
    pub fn advance(&mut self) {
        self.iteration = (self.iteration + 1).min(self.max_iteration - 1);
    }

    /// Back to iteration 0.
    #[inline]
    pub fn reset(&mut self) {
        self.iteration = 0;
    }

    /// Clock positioned at `iteration`, clamped into the valid range.
    pub fn at(max_iteration: u64, iteration: u64) -> Self {
        let mut clock = Self::new(max_iteration);
        clock.iteration = iteration.min(clock.max_iteration - 1);
        clock
    }
}

impl fmt::Display for AnnealClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.iteration, self.max_iteration)
    }
}
