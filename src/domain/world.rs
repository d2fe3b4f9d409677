use std::collections::{HashMap, HashSet};

use rand::Rng;
use tracing::trace;

use super::{load_pattern, Cell, CellState, PatternError, PatternOptions};
use crate::application::Generations;

/// Axis-aligned box enclosing every live cell (inclusive).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub const fn width(&self) -> u64 {
        self.max_x.abs_diff(self.min_x).saturating_add(1)
    }

    pub const fn height(&self) -> u64 {
        self.max_y.abs_diff(self.min_y).saturating_add(1)
    }
}

/// The set of live cells on an unbounded, non-wrapping grid.
/// Worlds are never mutated by evolution: each step builds a new one.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct World {
    cells: HashSet<Cell>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a world from coordinate pairs, duplicates collapse
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        coords.into_iter().map(Cell::from).collect()
    }

    /// Load text art and assemble the initial world
    pub fn from_pattern(text: &str, options: &PatternOptions) -> Result<Self, PatternError> {
        Ok(Self::from_coords(load_pattern(text, options)?))
    }

    /// Random soup in `[0, width) x [0, height)`, each cell live with probability `density`
    pub fn random<R: Rng>(width: u32, height: u32, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        (0..height as i64)
            .flat_map(|y| (0..width as i64).map(move |x| Cell::new(x, y)))
            .filter(|_| rng.random_bool(density))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    /// Every cell adjacent to at least one live cell, mapped to its live-neighbour count.
    /// Cells with no live neighbours never appear.
    pub fn neighbor_counts(&self) -> HashMap<Cell, u8> {
        let mut counts = HashMap::with_capacity(self.cells.len() * 8);
        for neighbor in self.cells.iter().flat_map(|cell| cell.neighbors()) {
            *counts.entry(neighbor).or_insert(0u8) += 1;
        }
        counts
    }

    /// Count live neighbours of a single cell
    pub fn live_neighbors(&self, cell: Cell) -> u8 {
        cell.neighbors().filter(|n| self.cells.contains(n)).count() as u8
    }

    /// Pure functional evolution - returns the successor world
    pub fn next_generation(&self) -> Self {
        let next: Self = self
            .neighbor_counts()
            .into_iter()
            .filter(|&(cell, count)| {
                CellState::from_alive(self.contains(cell)).evolve(count).is_alive()
            })
            .map(|(cell, _)| cell)
            .collect();

        trace!(before = self.len(), after = next.len(), "advanced one generation");
        next
    }

    /// Lazy infinite sequence starting with this world as generation 0
    pub fn generations(self) -> Generations {
        Generations::new(self)
    }

    /// Smallest box containing every live cell, `None` when empty
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.iter();
        let first = cells.next()?;
        let init = Bounds { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        Some(cells.fold(init, |b, c| Bounds {
            min_x: b.min_x.min(c.x),
            min_y: b.min_y.min(c.y),
            max_x: b.max_x.max(c.x),
            max_y: b.max_y.max(c.y),
        }))
    }

    /// Copy of this world shifted by `(dx, dy)`.
    /// Cells pushed past the coordinate range are dropped.
    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        self.iter().filter_map(|cell| cell.offset(dx, dy)).collect()
    }
}

impl FromIterator<Cell> for World {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl From<HashSet<Cell>> for World {
    fn from(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }
}

impl IntoIterator for World {
    type Item = Cell;
    type IntoIter = std::collections::hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::{SeedableRng, rngs::SmallRng};

    fn world(coords: &[(i64, i64)]) -> World {
        World::from_coords(coords.iter().copied())
    }

    #[test]
    fn test_empty_world_is_fixed_point() {
        assert!(World::new().next_generation().is_empty());
    }

    #[test]
    fn test_isolated_cell_dies() {
        assert!(world(&[(5, -3)]).next_generation().is_empty());
    }

    #[test]
    fn test_pair_dies() {
        assert!(world(&[(0, 0), (1, 0)]).next_generation().is_empty());
    }

    #[test]
    fn test_tromino_becomes_block() {
        let next = world(&[(0, 0), (1, 1), (0, 1)]).next_generation();
        assert_eq!(next, world(&[(0, 1), (1, 0), (0, 0), (1, 1)]));
    }

    #[test]
    fn test_block_is_still_life() {
        let block = world(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let once = block.next_generation();
        assert_eq!(once, block);
        assert_eq!(once.next_generation(), block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = world(&[(-1, 0), (0, 0), (1, 0)]);
        let vertical = world(&[(0, -1), (0, 0), (0, 1)]);
        assert_eq!(horizontal.next_generation(), vertical);
        assert_eq!(vertical.next_generation(), horizontal);
    }

    #[test]
    fn test_overcrowded_centre_dies() {
        // Plus shape: the centre has 4 neighbours
        let plus = world(&[(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]);
        let next = plus.next_generation();
        assert!(!next.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_neighbor_counts() {
        let counts = world(&[(0, 0), (2, 0)]).neighbor_counts();
        assert_eq!(counts.get(&Cell::new(1, 0)), Some(&2));
        assert_eq!(counts.get(&Cell::new(-1, 0)), Some(&1));
        // Live cells are not their own neighbours
        assert_eq!(counts.get(&Cell::new(0, 0)), None);
        assert_eq!(counts.get(&Cell::new(5, 5)), None);
    }

    #[test]
    fn test_survivors_have_two_or_three_neighbors() {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        for _ in 0..20 {
            let current = World::random(24, 24, 0.35, &mut rng);
            let next = current.next_generation();
            for cell in next.iter() {
                let n = current.live_neighbors(cell);
                assert!(n == 2 || n == 3, "{cell:?} has {n} neighbours");
                if !current.contains(cell) {
                    assert_eq!(n, 3);
                }
            }
        }
    }

    #[test]
    fn test_neighbor_counts_agree_with_direct_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        let current = World::random(16, 16, 0.4, &mut rng);
        for (cell, count) in current.neighbor_counts() {
            assert_eq!(current.live_neighbors(cell), count);
        }
    }

    #[test]
    fn test_glider_translates() {
        let glider = presets::glider().world().unwrap();
        let mut current = glider.clone();
        for _ in 0..4 {
            current = current.next_generation();
        }
        assert_eq!(current, glider.translated(1, 1));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(World::new().bounds(), None);
        let bounds = world(&[(-2, 3), (4, -1), (0, 0)]).bounds().unwrap();
        assert_eq!(bounds, Bounds { min_x: -2, min_y: -1, max_x: 4, max_y: 3 });
        assert_eq!(bounds.width(), 7);
        assert_eq!(bounds.height(), 5);
    }

    #[test]
    fn test_random_respects_area_and_density() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(World::random(10, 10, 0.0, &mut rng).is_empty());
        let full = World::random(10, 10, 1.0, &mut rng);
        assert_eq!(full.len(), 100);
        let bounds = full.bounds().unwrap();
        assert_eq!((bounds.width(), bounds.height()), (10, 10));
    }

    #[test]
    fn test_random_is_deterministic_for_seed() {
        let a = World::random(20, 20, 0.3, &mut SmallRng::seed_from_u64(42));
        let b = World::random(20, 20, 0.3, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_blinker_at_range_edge_does_not_wrap() {
        let edge = world(&[(i64::MAX, 0), (i64::MAX, 1), (i64::MAX, 2)]);
        let next = edge.next_generation();
        // The birth at x = i64::MAX + 1 has nowhere to go
        assert_eq!(next, world(&[(i64::MAX - 1, 1), (i64::MAX, 1)]));
        assert!(next.iter().all(|cell| cell.x > 0));
    }

    #[test]
    fn test_translated_drops_cells_past_range() {
        let pair = world(&[(i64::MAX - 1, 0), (i64::MAX, 0)]);
        assert_eq!(pair.translated(1, 0), world(&[(i64::MAX, 0)]));
    }

    #[test]
    fn test_bounds_span_whole_range() {
        let wide = world(&[(i64::MIN, 0), (i64::MAX, 0)]);
        assert_eq!(wide.bounds().unwrap().width(), u64::MAX);
    }

    #[test]
    fn test_world_from_cell_set() {
        let cells: HashSet<Cell> = [(0, 0), (1, 1), (0, 1)].into_iter().map(Cell::from).collect();
        let world = World::from(cells.clone());
        assert_eq!(world.cells(), &cells);

        let mut round: Vec<Cell> = world.next_generation().into_iter().collect();
        round.sort();
        let expected: Vec<Cell> = [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().map(Cell::from).collect();
        assert_eq!(round, expected);
    }

    #[test]
    fn test_duplicate_coords_collapse() {
        assert_eq!(world(&[(1, 1), (1, 1)]).len(), 1);
    }
}
