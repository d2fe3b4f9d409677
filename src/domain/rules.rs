/// Liveness of a single position during one generation step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub const fn from_alive(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// State after one B3/S23 step, given the live-neighbour count.
    ///
    /// Birth needs exactly three live neighbours and survival needs two or
    /// three. Any other count leaves the position empty, whether the
    /// cell starved (0-1) or was crowded out (4-8).
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}
