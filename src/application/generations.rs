use crate::domain::World;

/// Lazy, infinite sequence of world snapshots.
///
/// The first pull yields the initial world (generation 0); each later pull
/// computes exactly one transition from the previously yielded world. The
/// sequence is forward-only: to restart, build a new one from a stored
/// initial world.
#[derive(Clone, Debug)]
pub struct Generations {
    current: World,
    started: bool,
}

impl Generations {
    pub fn new(initial: World) -> Self {
        Self { current: initial, started: false }
    }

    /// Most recently yielded world, `None` before the first pull
    pub fn current(&self) -> Option<&World> {
        self.started.then_some(&self.current)
    }

    /// Live-cell count of the most recently yielded world, without advancing
    pub fn population(&self) -> Option<usize> {
        self.current().map(World::len)
    }
}

impl Iterator for Generations {
    type Item = World;

    fn next(&mut self) -> Option<World> {
        if self.started {
            self.current = self.current.next_generation();
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
