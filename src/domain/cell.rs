use std::collections::HashSet;

/// Relative offsets of the eight cells surrounding the origin.
pub const NEIGHBORHOOD: [(i64, i64); 8] = [
    (-1, 1), (0, 1), (1, 1),
    (-1, 0),         (1, 0),
    (-1, -1), (0, -1), (1, -1),
];

/// A position on the grid.
/// Cells carry no state of their own; liveness is membership in a `World`.
/// The grid does not wrap: positions past the `i64` range simply do not exist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift this cell by an offset, `None` if it leaves the coordinate range
    pub const fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// The adjacent cells, in `NEIGHBORHOOD` order.
    /// Eight of them except at the edge of the coordinate range.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBORHOOD.into_iter().filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Set of the eight neighbours of `cell`
pub fn neighbors_of(cell: Cell) -> HashSet<Cell> {
    cell.neighbors().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patterns::{load_pattern, PatternOptions};

    #[test]
    fn test_neighbors_of_origin() {
        let expected: HashSet<Cell> = [
            (-1, 1), (0, 1), (1, 1), (1, 0),
            (1, -1), (0, -1), (-1, -1), (-1, 0),
        ]
        .into_iter()
        .map(Cell::from)
        .collect();

        assert_eq!(neighbors_of(Cell::new(0, 0)), expected);
    }

    #[test]
    fn test_neighbors_are_shifted() {
        let cell = Cell::new(10, -4);
        let neighbors = neighbors_of(cell);
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&cell));
        assert!(neighbors.contains(&Cell::new(9, -5)));
        assert!(neighbors.contains(&Cell::new(11, -3)));
    }

    #[test]
    fn test_offset_stops_at_range_edge() {
        assert_eq!(Cell::new(i64::MAX, 0).offset(1, 0), None);
        assert_eq!(Cell::new(0, i64::MIN).offset(0, -1), None);
        assert_eq!(Cell::new(i64::MAX, 0).offset(-1, 0), Some(Cell::new(i64::MAX - 1, 0)));
    }

    #[test]
    fn test_corner_cell_has_three_neighbors() {
        let neighbors = neighbors_of(Cell::new(i64::MAX, i64::MIN));
        let expected: HashSet<Cell> = [
            (i64::MAX - 1, i64::MIN),
            (i64::MAX - 1, i64::MIN + 1),
            (i64::MAX, i64::MIN + 1),
        ]
        .into_iter()
        .map(Cell::from)
        .collect();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn test_neighborhood_invariants() {
        let offsets: HashSet<_> = NEIGHBORHOOD.iter().copied().collect();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        for (dx, dy) in &offsets {
            assert!(offsets.contains(&(-dx, -dy)));
        }
    }

    #[test]
    fn test_neighborhood_matches_text_template() {
        let options = PatternOptions { include_origin: false, ..PatternOptions::default() };
        let template: HashSet<_> = load_pattern("xxx\nxox\nxxx", &options)
            .unwrap()
            .into_iter()
            .collect();
        let offsets: HashSet<_> = NEIGHBORHOOD.iter().copied().collect();
        assert_eq!(template, offsets);
    }
}
