use tracing::trace;

use super::{PatternError, World};

/// Characters recognised by the pattern loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternOptions {
    /// Character marking a live cell
    pub live: char,
    /// Character marking coordinate (0, 0)
    pub origin: char,
    /// Whether the origin position itself is emitted as a live cell
    pub include_origin: bool,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            live: 'x',
            origin: 'o',
            include_origin: true,
        }
    }
}

/// Convert text art into relative `(x, y)` coordinates.
///
/// Rows are split on `'\n'` and indexed from the top, columns by character
/// from the left. When the origin character occurs exactly once its position
/// becomes `(0, 0)`; otherwise the top-left corner is the origin. Any other
/// character is a dead cell, and ragged rows are fine.
///
/// Coordinates are returned in row-major order.
pub fn load_pattern(text: &str, options: &PatternOptions) -> Result<Vec<(i64, i64)>, PatternError> {
    let (origin_row, origin_col) = find_origin(text, options.origin)?.unwrap_or((0, 0));

    let cells: Vec<(i64, i64)> = text
        .split('\n')
        .enumerate()
        .flat_map(|(row, line)| line.chars().enumerate().map(move |(col, ch)| (row, col, ch)))
        .filter(|&(_, _, ch)| ch == options.live || (options.include_origin && ch == options.origin))
        .map(|(row, col, _)| {
            (
                col as i64 - origin_col as i64,
                row as i64 - origin_row as i64,
            )
        })
        .collect();

    trace!(cells = cells.len(), origin_row, origin_col, "loaded pattern text");
    Ok(cells)
}

/// Locate the single origin marker as `(row, column)`.
fn find_origin(text: &str, origin: char) -> Result<Option<(usize, usize)>, PatternError> {
    let mut hits = text
        .split('\n')
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(move |&(_, ch)| ch == origin)
                .map(move |(col, _)| (row, col))
        });

    let first = hits.next();
    match (first, hits.next()) {
        (Some(first), Some(second)) => Err(PatternError::AmbiguousOrigin { origin, first, second }),
        (first, _) => Ok(first),
    }
}

/// A named pattern stored as text art.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

impl Pattern {
    pub const fn new(name: &'static str, description: &'static str, text: &'static str) -> Self {
        Self { name, description, text }
    }

    /// Load the pattern with the default `x` / `o` characters
    pub fn world(&self) -> Result<World, PatternError> {
        World::from_pattern(self.text, &PatternOptions::default())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", "xx\nxx")
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", "...\nxxx\n...")
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new("Toad", "Oscillator (period 2)", ".xxx\nxxx.")
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new("Beacon", "Oscillator (period 2)", "xx..\nx...\n...x\n..xx")
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new("Glider", "Moves diagonally (period 4)", ".x.\n..x\nxxx")
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            ".x..x\n\
             x....\n\
             x...x\n\
             xxxx.",
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            "...............\n\
             ...xxx...xxx...\n\
             ...............\n\
             .x....x.x....x.\n\
             .x....x.x....x.\n\
             .x....x.x....x.\n\
             ...xxx...xxx...\n\
             ...............\n\
             ...xxx...xxx...\n\
             .x....x.x....x.\n\
             .x....x.x....x.\n\
             .x....x.x....x.\n\
             ...............\n\
             ...xxx...xxx...\n\
             ...............",
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new("R-pentomino", "Methuselah - stabilizes at gen 1103", ".xx\nxx.\n.x.")
    }

    /// Diehard - vanishes after 130 generations
    pub fn diehard() -> Pattern {
        Pattern::new(
            "Diehard",
            "Methuselah - dies out at gen 130",
            "..........\n\
             .......x..\n\
             .xx.......\n\
             ..x...xxx.\n\
             ..........",
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - 633 cells at gen 5206",
            ".........\n\
             ..x......\n\
             ....x....\n\
             .xx..xxx.\n\
             .........",
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            "........................x...........\n\
             ......................x.x...........\n\
             ............xx......xx............xx\n\
             ...........x...x....xx............xx\n\
             xx........x.....x...xx..............\n\
             xx........x...x.xx....x.x...........\n\
             ..........x.....x.......x...........\n\
             ...........x...x....................\n\
             ............xx......................",
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            pulsar(),
            r_pentomino(),
            diehard(),
            acorn(),
            glider_gun(),
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn find(name: &str) -> Result<Pattern, PatternError> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PatternError::UnknownPreset(name.to_owned()))
    }
}
