use crate::maze::Direction;

/// A single maze cell holding one wall flag per direction.
/// `true` means the wall is present, `false` means the passage is open.
///
/// Cells never point at each other; adjacency comes from their coordinates in the [`Grid`].
/// Two cells are the same cell when they sit at the same coordinate, so there is no
/// flag-based `PartialEq`.
///
/// [`Grid`]: crate::maze::Grid
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    walls: [bool; 4],
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// A fully walled cell.
    pub const fn new() -> Self {
        Cell { walls: [true; 4] }
    }

    pub fn wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    pub fn set_wall(&mut self, dir: Direction, present: bool) {
        self.walls[dir.index()] = present;
    }

    /// Wall flags in north, east, south, west order.
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Reads the wall facing the neighbor at `delta`.
    /// Returns `None` for anything other than the four unit steps.
    pub fn wall_at(&self, delta: (i32, i32)) -> Option<bool> {
        Direction::from_delta(delta).map(|dir| self.wall(dir))
    }

    /// Writes the wall facing the neighbor at `delta`.
    /// Writes through an unrecognised delta are ignored.
    pub fn set_wall_at(&mut self, delta: (i32, i32), present: bool) {
        match Direction::from_delta(delta) {
            Some(dir) => self.set_wall(dir, present),
            None => tracing::trace!("[cell] ignoring wall write for delta {:?}", delta),
        }
    }

    /// Number of open sides.
    pub fn open_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }

    pub fn is_fully_walled(&self) -> bool {
        self.walls.iter().all(|&wall| wall)
    }
}

impl std::ops::Index<Direction> for Cell {
    type Output = bool;

    fn index(&self, dir: Direction) -> &Self::Output {
        &self.walls[dir.index()]
    }
}

impl std::ops::IndexMut<Direction> for Cell {
    fn index_mut(&mut self, dir: Direction) -> &mut Self::Output {
        &mut self.walls[dir.index()]
    }
}
