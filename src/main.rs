use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::SmallRng};
use sparse_life::{PatternOptions, Simulation, SimulationConfig, World, presets};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "sparse-life",
    version,
    about = "Run Conway's Game of Life on an unbounded grid"
)]
struct Cli {
    /// Preset pattern name (see --list).
    #[arg(long, conflicts_with_all = ["file", "soup"])]
    pattern: Option<String>,

    /// Text-art file describing the initial cells.
    #[arg(long, conflicts_with = "soup")]
    file: Option<PathBuf>,

    /// Random soup of the given size, e.g. 64x64.
    #[arg(long)]
    soup: Option<String>,

    /// Probability that a soup cell starts alive.
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Seed for the soup generator.
    #[arg(long, default_value_t = 0xC0FF_EE00)]
    seed: u64,

    /// Character marking a live cell in pattern text.
    #[arg(long, default_value_t = 'x')]
    live_char: char,

    /// Character marking the coordinate origin in pattern text.
    #[arg(long, default_value_t = 'o')]
    origin_char: char,

    /// Treat the origin marker as a live cell.
    #[arg(long)]
    include_origin: bool,

    /// Maximum number of generations to compute.
    #[arg(long, env = "SPARSE_LIFE_GENERATIONS", default_value_t = 1000)]
    generations: u64,

    /// Log progress every N generations (0 disables).
    #[arg(long, env = "SPARSE_LIFE_REPORT_EVERY", default_value_t = 100)]
    report_every: u64,

    /// List the available preset patterns and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.list {
        for pattern in presets::all_patterns() {
            println!("{:<20} {}", pattern.name, pattern.description);
        }
        return Ok(());
    }

    let initial = initial_world(&cli)?;
    info!(population = initial.len(), "Loaded initial world");

    let simulation = Simulation::new(SimulationConfig {
        max_generations: cli.generations,
        report_every: cli.report_every,
    });
    let summary = simulation.run(initial);

    match summary.extinct_at {
        Some(generation) => println!(
            "extinct at generation {} (peak population {})",
            generation, summary.peak_population
        ),
        None => println!(
            "generation {}: {} live cells (initial {}, peak {}) in {:.2} ms",
            summary.generations,
            summary.final_population,
            summary.initial_population,
            summary.peak_population,
            summary.elapsed_ms
        ),
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn initial_world(cli: &Cli) -> Result<World> {
    if let Some(name) = &cli.pattern {
        let pattern = presets::find(name)?;
        return Ok(pattern.world()?);
    }

    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read pattern file {}", path.display()))?;
        let options = PatternOptions {
            live: cli.live_char,
            origin: cli.origin_char,
            include_origin: cli.include_origin,
        };
        return World::from_pattern(&text, &options)
            .with_context(|| format!("invalid pattern in {}", path.display()));
    }

    if let Some(size) = &cli.soup {
        let (width, height) = parse_size(size)?;
        let mut rng = SmallRng::seed_from_u64(cli.seed);
        return Ok(World::random(width, height, cli.density, &mut rng));
    }

    bail!("no initial world given: use --pattern, --file or --soup")
}

fn parse_size(size: &str) -> Result<(u32, u32)> {
    let (width, height) = size
        .split_once(['x', 'X'])
        .with_context(|| format!("soup size {size:?} must look like WIDTHxHEIGHT"))?;
    let width = width.trim().parse().with_context(|| format!("invalid soup width in {size:?}"))?;
    let height = height.trim().parse().with_context(|| format!("invalid soup height in {size:?}"))?;
    Ok((width, height))
}
