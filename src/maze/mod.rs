pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// A cell position `(x, y)`. Signed so that lookups just outside the grid,
/// such as `(-1, 0)`, are expressible and resolve to "no such cell".
pub type Coord = (i32, i32);

/// The four cardinal directions a cell can have a wall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order neighbors are visited.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Step `(dx, dy)` to the neighboring cell. North is towards `y - 1`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Maps a unit step back to its direction. Anything that is not one of the
    /// four unit steps has no direction.
    pub fn from_delta(delta: (i32, i32)) -> Option<Direction> {
        match delta {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Position of this direction's flag in a cell's wall array.
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// The coordinate one step from `coord` in this direction. May be out of bounds;
    /// `None` only when the step leaves the `i32` range.
    pub fn step(self, coord: Coord) -> Option<Coord> {
        let (dx, dy) = self.delta();
        Some((coord.0.checked_add(dx)?, coord.1.checked_add(dy)?))
    }

    /// Single-letter label used by the debug dump.
    pub fn initial(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "North"),
            Direction::East => write!(f, "East"),
            Direction::South => write!(f, "South"),
            Direction::West => write!(f, "West"),
        }
    }
}

/// Direction from `from` to `to` when the two coordinates are adjacent.
pub fn direction_between(from: Coord, to: Coord) -> Option<Direction> {
    let dx = to.0.checked_sub(from.0)?;
    let dy = to.1.checked_sub(from.1)?;
    Direction::from_delta((dx, dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_delta(dir.delta()), Some(dir));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_unknown_delta() {
        assert_eq!(Direction::from_delta((0, 0)), None);
        assert_eq!(Direction::from_delta((1, 1)), None);
        assert_eq!(Direction::from_delta((2, 0)), None);
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(direction_between((1, 1), (1, 0)), Some(Direction::North));
        assert_eq!(direction_between((1, 1), (0, 1)), Some(Direction::West));
        assert_eq!(direction_between((1, 1), (3, 1)), None);
        assert_eq!(direction_between((i32::MIN, 0), (i32::MAX, 0)), None);
        assert_eq!(direction_between((0, i32::MAX), (0, i32::MIN)), None);
    }

    #[test]
    fn test_step_at_i32_limits() {
        assert_eq!(Direction::East.step((i32::MAX, 0)), None);
        assert_eq!(Direction::North.step((0, i32::MIN)), None);
        assert_eq!(Direction::West.step((i32::MAX, 0)), Some((i32::MAX - 1, 0)));
        assert_eq!(Direction::South.step((2, 3)), Some((2, 4)));
    }
}
