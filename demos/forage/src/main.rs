//! forage: headless driver for the rust_sma slime-mould simulation.
//!
//! Spawns a population, places food (and optionally a maze), runs for a
//! fixed number of ticks and writes the CSV output:
//!
//! ```text
//! cargo run --release -p forage -- --preset small --spawn ring \
//!     --food 320,120 --food 160,360 --ticks 2000 --output output/forage
//! ```
//!
//! `RUST_LOG=sma_sim=trace` shows per-tick summaries.

mod config;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use sma_agent::{AgentStoreBuilder, SpawnMode};
use sma_behavior::SlimeMouldBehavior;
use sma_core::{BoundaryPolicy, DomainPreset, Vec2};
use sma_output::{CsvWriter, SimOutputObserver};
use sma_sim::SimBuilder;
use sma_world::{FoodSet, ObstacleGrid};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use config::RunFile;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "forage", version, about = "Slime-mould foraging simulation")]
struct Args {
    /// TOML run file; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Domain size and population preset.
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Agent count (overrides the preset's).
    #[arg(short = 'n', long)]
    agents: Option<usize>,

    #[arg(long, value_enum)]
    spawn: Option<SpawnArg>,

    /// Food source as `X,Y`.  Repeatable.
    #[arg(long = "food", value_parser = parse_point)]
    food: Vec<Vec2>,

    #[arg(short, long)]
    ticks: Option<u64>,

    /// Anneal horizon (defaults to the tick count).
    #[arg(long)]
    max_iteration: Option<u64>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Worker threads.  Defaults to all logical cores.
    #[arg(long)]
    threads: Option<usize>,

    /// Reflect off the domain edges instead of wrapping.
    #[arg(long)]
    bounce: bool,

    /// Obstacle map: rows of `0`/`1`.
    #[arg(long)]
    obstacles: Option<PathBuf>,

    #[arg(long, default_value_t = 20.0)]
    cell_size: f32,

    /// Snapshot agents every N ticks (0 disables).
    #[arg(long)]
    snapshot_every: Option<u64>,

    #[arg(short, long, default_value = "output/forage")]
    output: PathBuf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PresetArg {
    Mini,
    Small,
    Medium,
    Big,
}

impl From<PresetArg> for DomainPreset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Mini   => DomainPreset::Mini,
            PresetArg::Small  => DomainPreset::Small,
            PresetArg::Medium => DomainPreset::Medium,
            PresetArg::Big    => DomainPreset::Big,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SpawnArg {
    Noise,
    Ring,
    Center,
    TwoPoints,
    ThreePoints,
}

impl From<SpawnArg> for SpawnMode {
    fn from(s: SpawnArg) -> Self {
        match s {
            SpawnArg::Noise       => SpawnMode::Noise,
            SpawnArg::Ring        => SpawnMode::Ring,
            SpawnArg::Center      => SpawnMode::Center,
            SpawnArg::TwoPoints   => SpawnMode::TwoPoints,
            SpawnArg::ThreePoints => SpawnMode::ThreePoints,
        }
    }
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Vec2::new(x, y))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let args = Args::parse();

    // 1. Merge the run file with command-line overrides.
    let mut run = match &args.config {
        Some(path) => RunFile::load(path)?,
        None => RunFile::default(),
    };
    if let Some(preset) = args.preset {
        run.preset = Some(preset.into());
    }

    let mut config = run.sim.clone();
    let mut agent_count = run.agents.unwrap_or(DomainPreset::Mini.dimensions().2);
    if let Some(preset) = run.preset {
        let (w, h, n) = preset.dimensions();
        config.width = w;
        config.height = h;
        agent_count = run.agents.unwrap_or(n);
    }
    if let Some(n) = args.agents {
        agent_count = n;
    }
    if let Some(t) = args.ticks {
        config.total_ticks = t;
        config.max_iteration = t.max(1);
    }
    if let Some(m) = args.max_iteration {
        config.max_iteration = m;
    }
    if let Some(s) = args.seed {
        config.seed = s;
    }
    if let Some(t) = args.threads {
        config.num_threads = Some(t);
    }
    if let Some(every) = args.snapshot_every {
        config.output_interval_ticks = every;
    }
    if args.bounce {
        config.boundary = BoundaryPolicy::Bounce;
    }
    let spawn = args.spawn.map_or(run.spawn, SpawnMode::from);

    // 2. Thread pool.
    if let Some(threads) = config.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring the rayon thread pool")?;
    }

    // 3. Population and world.
    let agents = AgentStoreBuilder::new(agent_count, config.seed)
        .domain(config.width, config.height)
        .spawn(spawn)
        .build();

    let mut food = FoodSet::new();
    for [x, y] in &run.food {
        food.add(Vec2::new(*x, *y));
    }
    for p in &args.food {
        food.add(*p);
    }
    for p in food.positions() {
        if !(0.0..config.width as f32).contains(&p.x) || !(0.0..config.height as f32).contains(&p.y) {
            bail!("food at {p} lies outside the {}x{} domain", config.width, config.height);
        }
    }

    let obstacle_source = match (&args.obstacles, &run.obstacles) {
        (Some(path), _) => Some((path.clone(), args.cell_size)),
        (None, Some(section)) => Some((section.path.clone(), section.cell_size)),
        (None, None) => None,
    };

    let behavior = SlimeMouldBehavior::new(run.forage)?;
    let mut builder = SimBuilder::new(config.clone(), agents, behavior)
        .trail_params(run.trail)
        .food(food);
    if let Some((path, cell_size)) = obstacle_source {
        let grid = load_obstacles(&path, cell_size)?;
        info!(
            path = %path.display(),
            cols = grid.cols(),
            rows = grid.rows(),
            blocked = grid.blocked_count(),
            "obstacle map loaded"
        );
        builder = builder.obstacles(grid);
    }
    let mut sim = builder.build()?;

    // 4. Output.
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(&args.output)?);

    // 5. Run.
    println!("=== forage: rust_sma slime-mould simulation ===");
    println!(
        "Domain: {}x{}  |  Agents: {agent_count}  |  Spawn: {spawn:?}  |  Food: {}",
        config.width,
        config.height,
        sim.food.len()
    );
    println!(
        "Ticks: {}  |  Anneal horizon: {}  |  Boundary: {:?}  |  Seed: {}",
        config.total_ticks, config.max_iteration, config.boundary, config.seed
    );
    println!();

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }

    // 6. Summary.
    let secs = elapsed.as_secs_f64();
    println!("Simulation complete in {secs:.3} s");
    if secs > 0.0 {
        println!(
            "  {:.1} ticks/s  |  {:.2e} agent-updates/s",
            config.total_ticks as f64 / secs,
            (config.total_ticks as f64 * agent_count as f64) / secs
        );
    }
    match (sim.stats.best_fitness(), sim.best_food()) {
        (Some(best), Some(at)) => println!("  best fitness {best:.3} (food at {at})"),
        _ => println!("  no food observed"),
    }
    println!("  mean weight  {:.4}", sim.agents.mean_weight());
    println!("  trail total  {:.1}  |  peak {:.1}", sim.field.total(), sim.field.peak());
    println!("  output       {}", args.output.display());

    Ok(())
}

fn load_obstacles(path: &Path, cell_size: f32) -> Result<ObstacleGrid> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ObstacleGrid::parse(cell_size, &text).with_context(|| format!("parsing {}", path.display()))
}
