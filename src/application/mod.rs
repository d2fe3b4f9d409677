mod generations;
mod simulation;

pub use generations::Generations;
pub use simulation::{RunSummary, Simulation, SimulationConfig};
