//! Top-level run configuration.

use crate::{SmaError, SmaResult, Tick};

// ── BoundaryPolicy ────────────────────────────────────────────────────────────

/// What happens when an agent's step leaves the domain.  Either way the
/// agent's weight is reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundaryPolicy {
    /// Toroidal domain: leaving one edge re-enters at the opposite edge.
    #[default]
    Wrap,
    /// Reflect the heading (with jitter) and clamp just inside the edge.
    Bounce,
}

// ── AnnealPolicy ──────────────────────────────────────────────────────────────

/// When the anneal clock advances.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnnealPolicy {
    /// Advance once per tick regardless of food.
    #[default]
    Always,
    /// Advance only while food is present; reset to 0 whenever the food set
    /// is empty, so every new foraging episode starts exploratory.
    WhileFoodPresent,
}

// ── DomainPreset ──────────────────────────────────────────────────────────────

/// Stock domain sizes with matching population counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DomainPreset {
    #[default]
    Mini,
    Small,
    Medium,
    Big,
}

impl DomainPreset {
    /// `(width, height, agent_count)`.
    pub fn dimensions(self) -> (u32, u32, usize) {
        match self {
            DomainPreset::Mini   => (500, 500, 5_000),
            DomainPreset::Small  => (640, 480, 25_000),
            DomainPreset::Medium => (1280, 720, 100_000),
            DomainPreset::Big    => (1920, 1080, 1_000_000),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Domain width in trail cells.
    pub width: u32,

    /// Domain height in trail cells.
    pub height: u32,

    /// Ticks executed by `Sim::run`.
    pub total_ticks: u64,

    /// Anneal horizon.  The clock never reaches this value.
    pub max_iteration: u64,

    /// Master seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    pub boundary: BoundaryPolicy,

    pub anneal: AnnealPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        let (width, height, _) = DomainPreset::Mini.dimensions();
        Self {
            width,
            height,
            total_ticks:           1_000,
            max_iteration:         1_000,
            seed:                  0,
            num_threads:           None,
            output_interval_ticks: 0,
            boundary:              BoundaryPolicy::Wrap,
            anneal:                AnnealPolicy::Always,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject configurations the kernel cannot run.
    pub fn validate(&self) -> SmaResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SmaError::Config(format!(
                "domain must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_iteration == 0 {
            return Err(SmaError::Config("max_iteration must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(SmaError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
