//! Trail-following foraging with Slime Mould Algorithm weighting.
//!
//! One call to [`SlimeMouldBehavior::update`] runs, in order:
//!
//! 1. fitness (distance to every food) and the adaptive weight,
//! 2. foraging-target selection (exploit the best food or contract),
//! 3. trail marking when the target is within the capture radius,
//! 4. one step along the heading with obstacle and boundary correction,
//! 5. three-sensor steering over the trail field, biased toward the target,
//! 6. heading normalisation (done by [`Heading`] itself).
//!
//! Steps 2 and 3 are skipped while no food is present; the agent's weight is
//! then 0 and it performs a pure trail-following walk.

use rand::Rng;
use sma_agent::{AgentState, Heading};
use sma_core::{AgentId, AgentRng, BoundaryPolicy, DrawSite, HashRng, StatsContribution, Vec2};
use sma_world::ObstacleMap;

use crate::{AgentOutcome, BehaviorModel, BehaviorResult, Deposit, ForageParams, SensorRig, TickContext};

/// Distances below this count as this value when computing `1/d` influence.
const MIN_INFLUENCE_DISTANCE: f32 = 1e-3;

/// Upper bound for the `atanh` argument; the exact value 1 diverges.
const ATANH_LIMIT: f32 = 1.0 - 1e-6;

/// Weight an agent assigns to one food source.
///
/// `best`/`worst` are the effective fitness bounds (population record
/// combined with this agent's own observations).  A zero spread yields
/// exactly `1.0`; otherwise the normalised fitness is pushed up or down by a
/// random fraction of `ln(1 + normalised)`.
pub fn food_weight<R: Rng + ?Sized>(fitness: f32, best: f32, worst: f32, rng: &mut R) -> f32 {
    if worst == best {
        return 1.0;
    }
    let spread = worst - best;
    let normalized = (fitness - best) / spread;
    let r: f32 = rng.r#gen();
    let shift = r * normalized.ln_1p();
    if normalized > spread.abs() / 2.0 {
        1.0 + shift
    } else {
        1.0 - shift
    }
}

/// Per-agent fitness summary for one tick.
#[derive(Copy, Clone, Debug)]
struct Fitness {
    own_min: f32,
    nearest: Vec2,
    best:    f32,
    worst:   f32,
}

// ── SlimeMouldBehavior ────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SlimeMouldBehavior {
    params: ForageParams,
    rig:    SensorRig,
}

impl Default for SlimeMouldBehavior {
    fn default() -> Self {
        let params = ForageParams::default();
        Self { rig: SensorRig::new(params.sensor_angle, params.sensor_distance), params }
    }
}

impl SlimeMouldBehavior {
    pub fn new(params: ForageParams) -> BehaviorResult<Self> {
        params.validate()?;
        Ok(Self { rig: SensorRig::new(params.sensor_angle, params.sensor_distance), params })
    }

    #[inline]
    pub fn params(&self) -> &ForageParams {
        &self.params
    }

    #[inline]
    pub fn sensors(&self) -> &SensorRig {
        &self.rig
    }

    /// Extra turn toward the target: `bonus_max` at the target, falling
    /// linearly to `bonus_min` at `bonus_falloff`, damped by `(1 + weight)²`.
    pub fn rotation_bonus(&self, distance: f32, weight: f32) -> f32 {
        let p = &self.params;
        let t = (distance / p.bonus_falloff).clamp(0.0, 1.0);
        let raw = p.bonus_max + (p.bonus_min - p.bonus_max) * t;
        let damped = raw / ((1.0 + weight) * (1.0 + weight));
        if damped.is_finite() {
            damped.clamp(p.bonus_min, p.bonus_max)
        } else {
            p.bonus_min
        }
    }

    /// Distances to every food, recorded into `stats`.
    fn assess(&self, position: Vec2, ctx: &TickContext<'_>, stats: &mut StatsContribution) -> Option<Fitness> {
        let mut own_min = f32::INFINITY;
        let mut own_max = f32::NEG_INFINITY;
        let mut nearest: Option<Vec2> = None;
        for &food in ctx.food.positions() {
            let d = position.distance(food);
            stats.observe(d);
            let closer = match nearest {
                None => true,
                Some(n) => d < own_min || (d == own_min && food.total_cmp(&n).is_lt()),
            };
            if closer {
                nearest = Some(food);
            }
            own_min = own_min.min(d);
            own_max = own_max.max(d);
        }
        let nearest = nearest?;
        stats.record_best_food(nearest, own_min);
        Some(Fitness {
            own_min,
            nearest,
            best: ctx.stats.best_or_sentinel().min(own_min),
            worst: ctx.stats.worst_or_sentinel().max(own_max),
        })
    }

    /// Influence-weighted mean of the per-food weights, `1/d` influence.
    fn combined_weight(&self, position: Vec2, ctx: &TickContext<'_>, fitness: &Fitness, rng: &mut HashRng) -> f32 {
        let mut total = 0.0f32;
        let mut influence_sum = 0.0f32;
        for &food in ctx.food.positions() {
            let d = position.distance(food);
            let influence = 1.0 / d.max(MIN_INFLUENCE_DISTANCE);
            total += food_weight(d, fitness.best, fitness.worst, rng) * influence;
            influence_sum += influence;
        }
        if influence_sum > 0.0 { total / influence_sum } else { 0.0 }
    }

    fn select_target(
        &self,
        agent:    AgentId,
        position: Vec2,
        weight:   f32,
        fitness:  &Fitness,
        ctx:      &TickContext<'_>,
        rng:      AgentRng,
    ) -> Vec2 {
        let progress = ctx.anneal.progress();
        let mut explore = rng.stream(DrawSite::Explore);
        let p = (fitness.best - fitness.own_min).abs().tanh();
        let u: f32 = explore.r#gen();
        if u < p {
            let best_food = ctx.stats.best_food().unwrap_or(fitness.nearest);
            let vb = explore.gen_range(-1.0f32..=1.0) * (1.0 - progress).min(ATANH_LIMIT).atanh();
            let a = peer(agent, position, ctx.peers, rng.stream(DrawSite::PeerA));
            let b = peer(agent, position, ctx.peers, rng.stream(DrawSite::PeerB));
            best_food + vb * (weight * a - b)
        } else {
            (1.0 - progress) * position
        }
    }

    /// Uniform angle in `[-reflect_jitter, reflect_jitter]`.
    fn jitter(&self, rng: &mut HashRng) -> f32 {
        let j = self.params.reflect_jitter;
        if j > 0.0 { rng.gen_range(-j..=j) } else { 0.0 }
    }

    /// Correct a step from an open cell into a solid one.
    ///
    /// The violated axis is the one whose cell index changed; at least one
    /// did, since the current cell is open.  That axis is pushed back inside
    /// the current cell by `cell_size/10 + 1` and the heading is reflected
    /// about it.  If both axes changed, both are pushed and the x reflection
    /// wins.
    fn deflect(
        &self,
        position:  Vec2,
        next:      Vec2,
        heading:   Heading,
        obstacles: &dyn ObstacleMap,
        rng:       &mut HashRng,
    ) -> (Vec2, Heading) {
        let size = obstacles.cell_size();
        let margin = (size / 10.0 + 1.0).min(size / 2.0);
        let (cx, cy) = obstacles.cell_of(position);
        let (nx, ny) = obstacles.cell_of(next);
        let (hit_x, hit_y) = (nx != cx, ny != cy);

        let mut pushed = next;
        if hit_x {
            let left = cx as f32 * size;
            pushed.x = if nx < cx { left + margin } else { left + size - margin };
        }
        if hit_y {
            let top = cy as f32 * size;
            pushed.y = if ny < cy { top + margin } else { top + size - margin };
        }

        let h = heading.degrees();
        let jitter = self.jitter(rng);
        let reflected = if hit_x { 180.0 - h + jitter } else { 360.0 - h + jitter };
        (pushed, Heading::new(reflected))
    }

    /// Step 4.  Returns the corrected position and heading, and whether the
    /// agent's weight must be reset.
    fn step(&self, position: Vec2, heading: Heading, ctx: &TickContext<'_>, rng: AgentRng) -> (Vec2, Heading, bool) {
        let mut collision = rng.stream(DrawSite::Collision);
        let mut next = position + heading.direction() * self.params.speed;
        let mut heading = heading;
        let mut reset = false;

        // An agent already inside a solid cell walks on until it leaves it.
        if let Some(obstacles) = ctx.obstacles.filter(|o| o.is_blocked(next) && !o.is_blocked(position)) {
            (next, heading) = self.deflect(position, next, heading, obstacles, &mut collision);
            reset = true;
        }

        let (w, h) = (ctx.width(), ctx.height());
        let x_out = !(0.0..w).contains(&next.x);
        let y_out = !(0.0..h).contains(&next.y);
        if x_out || y_out {
            // Any border crossing ends the current foraging run.
            reset = true;
            match ctx.boundary {
                BoundaryPolicy::Wrap => {
                    next.x = wrap_axis(next.x, w);
                    next.y = wrap_axis(next.y, h);
                }
                BoundaryPolicy::Bounce => {
                    let jitter = self.jitter(&mut collision);
                    let deg = heading.degrees();
                    heading = if x_out {
                        Heading::new(180.0 - deg + jitter)
                    } else {
                        Heading::new(360.0 - deg + jitter)
                    };
                    next.x = bounce_axis(next.x, w);
                    next.y = bounce_axis(next.y, h);
                }
            }
        }
        (next, heading, reset)
    }

    /// Step 5: probabilistic three-sensor steering.
    fn steer(
        &self,
        position: Vec2,
        heading:  Heading,
        weight:   f32,
        target:   Option<Vec2>,
        ctx:      &TickContext<'_>,
        rng:      AgentRng,
    ) -> Heading {
        let sensors = self.rig.points(position, heading);
        let mut f = ctx.field.sample(sensors.forward);
        let mut l = ctx.field.sample(sensors.left);
        let mut r = ctx.field.sample(sensors.right);

        let mut bonus = 0.0;
        if let Some(target) = target {
            let boost = self.params.sensor_boost * (1.0 + weight);
            let df = sensors.forward.distance(target);
            let dl = sensors.left.distance(target);
            let dr = sensors.right.distance(target);
            if dr < dl && dr < df {
                r += boost;
            } else if dl < dr && dl < df {
                l += boost;
            } else if df < dl && df < dr {
                f += boost;
            }
            bonus = self.rotation_bonus(position.distance(target), weight);
        }

        let sum = f + l + r;
        if sum.is_nan() || sum <= 0.0 {
            return heading;
        }
        let turn = self.params.rotation_angle + bonus;
        let v: f32 = rng.stream(DrawSite::Steering).r#gen();
        if v < r / sum {
            heading.turned(turn)
        } else if v < (r + l) / sum {
            heading.turned(-turn)
        } else {
            heading
        }
    }
}

impl BehaviorModel for SlimeMouldBehavior {
    fn update(
        &self,
        agent: AgentId,
        state: AgentState,
        ctx:   &TickContext<'_>,
        rng:   AgentRng,
    ) -> (AgentState, AgentOutcome) {
        let mut outcome = AgentOutcome::default();
        let position = state.position;

        // Steps 1-3.
        let mut weight = 0.0;
        let mut target = state.target;
        let has_food = match self.assess(position, ctx, &mut outcome.stats) {
            Some(fitness) => {
                weight = self.combined_weight(position, ctx, &fitness, &mut rng.stream(DrawSite::Weight));
                target = self.select_target(agent, position, weight, &fitness, ctx, rng);
                if target.distance(position) < self.params.capture_radius && self.params.deposit_amount > 0.0 {
                    outcome.capture = Some(Deposit {
                        cell:   ctx.field.index_of(position),
                        amount: self.params.deposit_amount,
                    });
                }
                true
            }
            None => false,
        };

        // Step 4.
        let (next, heading, reset) = self.step(position, state.heading, ctx, rng);
        if reset {
            weight = 0.0;
        }

        // Steps 5-6.
        let heading = self.steer(next, heading, weight, has_food.then_some(target), ctx, rng);

        if self.params.imprint_amount > 0.0 {
            outcome.imprint = Some(Deposit {
                cell:   ctx.field.index_of(next),
                amount: self.params.imprint_amount,
            });
        }

        (AgentState { position: next, heading, weight, target }, outcome)
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Position of a uniformly drawn agent other than `agent`.  With no other
/// agent available the caller's own position is used.
pub(crate) fn peer(agent: AgentId, own: Vec2, peers: &[Vec2], mut rng: HashRng) -> Vec2 {
    if peers.len() < 2 {
        return own;
    }
    let mut j = rng.gen_range(0..peers.len() - 1);
    if j >= agent.index() {
        j += 1;
    }
    peers[j]
}

/// Toroidal correction: one domain length toward the inside.
#[inline]
fn wrap_axis(v: f32, dim: f32) -> f32 {
    let wrapped = if v < 0.0 {
        v + dim
    } else if v >= dim {
        v - dim
    } else {
        v
    };
    if (0.0..dim).contains(&wrapped) {
        return wrapped;
    }
    // Steps longer than the domain, or rounding onto the far edge.
    let r = wrapped.rem_euclid(dim);
    if r < dim { r } else { 0.0 }
}

/// Reflective correction: out-of-range values land one cell inside the edge.
#[inline]
fn bounce_axis(v: f32, dim: f32) -> f32 {
    let high = (dim - 2.0).max(0.0);
    if v < 0.0 {
        1.0f32.min(high)
    } else if v >= dim {
        high
    } else {
        v
    }
}
