//! Read-only simulation state passed to every agent update.

use sma_core::{AnnealClock, BoundaryPolicy, PopulationStats, Tick, Vec2};
use sma_world::{FoodSet, ObstacleMap, TrailField};

/// A read-only snapshot of the simulation state shared by every agent in a
/// tick.
///
/// Built once per tick by sma-sim.  All borrows live for the duration of one
/// agent phase; the simulation cannot mutate the field, stats, food or
/// positions while a `TickContext` exists, so every agent observes the same
/// pre-tick state.
pub struct TickContext<'a> {
    pub tick: Tick,

    /// Global seed the per-agent random keys derive from.
    pub seed: u64,

    pub field: &'a TrailField,

    pub food: &'a FoodSet,

    /// Run-long fitness record as of the end of the previous tick.
    pub stats: &'a PopulationStats,

    /// Every agent's position at the start of the tick, indexed by
    /// `AgentId`.  Peer draws read from here.
    pub peers: &'a [Vec2],

    pub anneal: AnnealClock,

    pub boundary: BoundaryPolicy,

    pub obstacles: Option<&'a dyn ObstacleMap>,
}

impl<'a> TickContext<'a> {
    /// Context with wrap-around boundaries and no obstacles.
    #[inline]
    pub fn new(
        tick:   Tick,
        seed:   u64,
        field:  &'a TrailField,
        food:   &'a FoodSet,
        stats:  &'a PopulationStats,
        peers:  &'a [Vec2],
        anneal: AnnealClock,
    ) -> Self {
        Self {
            tick,
            seed,
            field,
            food,
            stats,
            peers,
            anneal,
            boundary: BoundaryPolicy::Wrap,
            obstacles: None,
        }
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_obstacles(mut self, obstacles: Option<&'a dyn ObstacleMap>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Domain width in cells (the trail field's width).
    #[inline]
    pub fn width(&self) -> f32 {
        self.field.width() as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.field.height() as f32
    }
}
