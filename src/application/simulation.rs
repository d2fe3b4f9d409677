use std::time::Instant;

use tracing::{debug, info};

use super::Generations;
use crate::domain::World;

/// Run limits for a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of generation transitions to apply at most
    pub max_generations: u64,
    /// Emit a progress event every this many generations (0 disables)
    pub report_every: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_generations: 1000,
            report_every: 100,
        }
    }
}

/// Outcome of a finished run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Index of the last generation computed
    pub generations: u64,
    pub initial_population: usize,
    pub final_population: usize,
    pub peak_population: usize,
    /// First generation with no live cells, if the run reached one
    pub extinct_at: Option<u64>,
    pub final_world: World,
    pub elapsed_ms: f64,
}

/// Simulation drives a generation sequence to completion.
/// This is the application layer that coordinates domain logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Advance `initial` until the generation limit or extinction
    pub fn run(&self, initial: World) -> RunSummary {
        let start = Instant::now();
        let initial_population = initial.len();
        debug!(
            population = initial_population,
            max_generations = self.config.max_generations,
            "starting simulation"
        );

        let mut generations = Generations::new(initial);
        let mut peak_population = 0;
        let mut extinct_at = None;
        let mut last_generation = 0;
        let mut final_world = World::new();

        for (generation, world) in (0..=self.config.max_generations).zip(&mut generations) {
            peak_population = peak_population.max(world.len());
            last_generation = generation;

            if self.should_report(generation) {
                let bounds = world.bounds();
                info!(
                    generation,
                    population = world.len(),
                    width = bounds.map_or(0, |b| b.width()),
                    height = bounds.map_or(0, |b| b.height()),
                    "progress"
                );
            }

            let extinct = world.is_empty();
            final_world = world;
            if extinct {
                extinct_at = Some(generation);
                break;
            }
        }

        let summary = RunSummary {
            generations: last_generation,
            initial_population,
            final_population: final_world.len(),
            peak_population,
            extinct_at,
            final_world,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            generations = summary.generations,
            population = summary.final_population,
            extinct = summary.extinct_at.is_some(),
            elapsed_ms = summary.elapsed_ms,
            "simulation finished"
        );
        summary
    }

    fn should_report(&self, generation: u64) -> bool {
        self.config.report_every != 0 && generation % self.config.report_every == 0
    }
}
