//! Performance benchmark for the sparse generation engine

use std::time::Instant;

use rand::{SeedableRng, rngs::SmallRng};
use rayon::prelude::*;
use sparse_life::{World, presets};

fn benchmark_soup(size: u32, iterations: u32) -> (f64, usize) {
    let mut rng = SmallRng::seed_from_u64(u64::from(size));
    let mut world = World::random(size, size, 0.3, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        world = world.next_generation();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, world.len())
}

/// Independent soups advanced on separate threads sharing no state
fn benchmark_parallel_soups(count: u64, size: u32, iterations: u32) -> f64 {
    let soups: Vec<World> = (0..count)
        .map(|seed| World::random(size, size, 0.3, &mut SmallRng::seed_from_u64(seed)))
        .collect();

    let start = Instant::now();
    let total: usize = soups
        .into_par_iter()
        .map(|world| world.generations().nth(iterations as usize).map_or(0, |w| w.len()))
        .sum();
    let ms = start.elapsed().as_secs_f64() * 1000.0;
    println!("{count} soups of {size}x{size}: {total} live cells after {iterations} generations");
    ms
}

fn main() {
    println!("=== Sparse Life Performance Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>14}", "Size", "ms/gen", "Population", "Mcells/sec");
    println!("{:-<52}", "");

    for size in sizes {
        let (ms, population) = benchmark_soup(size, iterations);
        let throughput = population as f64 / (ms / 1000.0) / 1_000_000.0;
        println!(
            "{:>10} {:>12.2} {:>12} {:>14.2}",
            format!("{}x{}", size, size),
            ms,
            population,
            throughput
        );
    }

    println!("\n=== Methuselahs ===\n");

    for pattern in [presets::r_pentomino(), presets::acorn()] {
        let Ok(world) = pattern.world() else { continue };
        let start = Instant::now();
        let last = world.generations().nth(1000).map_or(0, |w| w.len());
        println!(
            "{:<12} 1000 generations in {:>8.2} ms, {} live cells",
            pattern.name,
            start.elapsed().as_secs_f64() * 1000.0,
            last
        );
    }

    println!("\n=== Parallel independent soups ===\n");

    let parallel_ms = benchmark_parallel_soups(32, 128, 100);
    println!("Total: {:.2} ms", parallel_ms);
}
