mod cell;
mod error;
mod patterns;
mod rules;
mod world;

pub use cell::{Cell, NEIGHBORHOOD, neighbors_of};
pub use error::PatternError;
pub use patterns::{Pattern, PatternOptions, load_pattern, presets};
pub use rules::CellState;
pub use world::{Bounds, World};
