// Domain layer - cells, worlds and the generation rule
pub mod domain;

// Application layer - generation sequences and run coordination
pub mod application;

// Re-exports for convenience
pub use domain::{Cell, World, Pattern, PatternError, PatternOptions, load_pattern, neighbors_of, presets};
pub use application::{Generations, RunSummary, Simulation, SimulationConfig};
