//! Fluent builder for constructing a [`Sim`].

use sma_agent::AgentStore;
use sma_behavior::BehaviorModel;
use sma_core::{AnnealClock, PopulationStats, SimConfig, Tick};
use sma_world::{FoodSet, ObstacleMap, TrailField, TrailParams};
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: domain size, ticks, anneal horizon, seed, policies
/// - [`AgentStore`]: from [`sma_agent::AgentStoreBuilder`]
/// - `B: BehaviorModel`: the behavior implementation
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                  |
/// |---------------------|--------------------------|
/// | `.trail_params(p)`  | `TrailParams::default()` |
/// | `.food(f)`          | empty `FoodSet`          |
/// | `.obstacles(m)`     | no obstacle layer        |
///
/// # Example
///
/// ```rust,ignore
/// let agents = AgentStoreBuilder::new(n, seed).domain(w, h).build();
/// let mut sim = SimBuilder::new(config, agents, SlimeMouldBehavior::default())
///     .obstacles(ObstacleGrid::parse(20.0, &maze)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:    SimConfig,
    agents:    AgentStore,
    behavior:  B,
    trail:     TrailParams,
    food:      FoodSet,
    obstacles: Option<Box<dyn ObstacleMap>>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: SimConfig, agents: AgentStore, behavior: B) -> Self {
        Self {
            config,
            agents,
            behavior,
            trail:     TrailParams::default(),
            food:      FoodSet::new(),
            obstacles: None,
        }
    }

    pub fn trail_params(mut self, params: TrailParams) -> Self {
        self.trail = params;
        self
    }

    /// Initial food set.
    pub fn food(mut self, food: FoodSet) -> Self {
        self.food = food;
        self
    }

    /// Install an obstacle layer queried by agent movement.
    pub fn obstacles(mut self, obstacles: impl ObstacleMap + 'static) -> Self {
        self.obstacles = Some(Box::new(obstacles));
        self
    }

    /// Validate inputs, allocate the trail field and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        let count = self.agents.count;
        if count == 0 {
            return Err(SimError::Config("population must contain at least one agent".into()));
        }
        let lengths = [
            (self.agents.positions.len(), "positions"),
            (self.agents.headings.len(), "headings"),
            (self.agents.weights.len(), "weights"),
            (self.agents.targets.len(), "targets"),
        ];
        for (got, what) in lengths {
            if got != count {
                return Err(SimError::AgentCountMismatch { expected: count, got, what });
            }
        }

        let (w, h) = (self.config.width as f32, self.config.height as f32);
        if let Some((i, p)) = self
            .agents
            .positions
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.is_finite() && (0.0..w).contains(&p.x) && (0.0..h).contains(&p.y)))
        {
            return Err(SimError::Config(format!(
                "agent {i} spawned at {p}, outside the {w}x{h} domain"
            )));
        }

        let field = TrailField::new(self.config.width, self.config.height, self.trail)?;

        info!(
            agents = count,
            width = self.config.width,
            height = self.config.height,
            max_iteration = self.config.max_iteration,
            boundary = ?self.config.boundary,
            anneal = ?self.config.anneal,
            obstacles = self.obstacles.is_some(),
            "simulation built"
        );

        Ok(Sim {
            clock:     Tick::ZERO,
            anneal:    AnnealClock::new(self.config.max_iteration),
            config:    self.config,
            agents:    self.agents,
            field,
            food:      self.food,
            stats:     PopulationStats::new(),
            behavior:  self.behavior,
            obstacles: self.obstacles,
        })
    }
}
