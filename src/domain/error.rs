use thiserror::Error;

/// Errors raised while turning pattern text into cells.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The origin marker appears more than once. Positions are `(row, column)`.
    #[error("origin marker {origin:?} appears more than once (at {first:?} and {second:?})")]
    AmbiguousOrigin {
        origin: char,
        first: (usize, usize),
        second: (usize, usize),
    },
    /// No preset pattern is registered under this name.
    #[error("unknown preset pattern: {0}")]
    UnknownPreset(String),
}
