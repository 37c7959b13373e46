//! TOML run file for the forage demo.
//!
//! Every section is optional; missing keys fall back to the library
//! defaults.
//!
//! ```toml
//! preset = "small"
//! spawn  = "ring"
//! food   = [[320.0, 120.0], [160.0, 360.0]]
//!
//! [sim]
//! total_ticks   = 2000
//! max_iteration = 2000
//! boundary      = "bounce"
//!
//! [forage]
//! sensor_distance = 12.0
//!
//! [obstacles]
//! path      = "demos/forage/maze.txt"
//! cell_size = 20.0
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sma_agent::SpawnMode;
use sma_behavior::ForageParams;
use sma_core::{DomainPreset, SimConfig};
use sma_world::TrailParams;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunFile {
    /// Overrides `sim.width`/`sim.height` and the agent count.
    pub preset: Option<DomainPreset>,
    pub agents: Option<usize>,
    pub spawn:  SpawnMode,
    pub food:   Vec<[f32; 2]>,
    pub sim:    SimConfig,
    pub forage: ForageParams,
    pub trail:  TrailParams,
    pub obstacles: Option<ObstacleSection>,
}

#[derive(Debug, Deserialize)]
pub struct ObstacleSection {
    pub path: PathBuf,
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

fn default_cell_size() -> f32 {
    20.0
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
