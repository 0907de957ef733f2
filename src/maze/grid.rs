use std::fmt::{self, Write as _};

use crate::error::{MazeError, Result};
use crate::maze::{Coord, Direction, cell::Cell, direction_between};

/// A square grid of cells stored row-major in one flat slice.
pub struct Grid {
    data: Box<[Cell]>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Creates a `size` by `size` grid where every cell is fully walled.
    pub fn new(size: i32) -> Result<Self> {
        if size <= 0 {
            return Err(MazeError::InvalidSize(size));
        }
        let len = (size as usize)
            .checked_mul(size as usize)
            .ok_or(MazeError::InvalidSize(size))?;
        // Reserve fallibly so an unallocatable size is an error rather than a panic
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| MazeError::InvalidSize(size))?;
        cells.resize(len, Cell::new());
        let data = cells.into_boxed_slice();
        Ok(Grid {
            data,
            width: size,
            height: size,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        (0..self.width).contains(&coord.0) && (0..self.height).contains(&coord.1)
    }

    fn ravel_index(&self, coord: Coord) -> Option<usize> {
        // In bounds means both components are non-negative and fit in the grid
        self.is_in_bounds(coord)
            .then(|| coord.1 as usize * self.width as usize + coord.0 as usize)
    }

    /// Inverse of the row-major index mapping.
    pub fn coord_of(&self, index: usize) -> Coord {
        let width = self.width as usize;
        ((index % width) as i32, (index / width) as i32)
    }

    /// The cell at `(x, y)`, or `None` when the coordinate lies outside the grid.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.ravel_index((x, y)).map(|idx| &self.data[idx])
    }

    pub fn get_cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.ravel_index((x, y)).map(|idx| &mut self.data[idx])
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Coordinates of the cells adjacent to `coord` that exist, in north, east, south, west order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| dir.step(coord))
            .filter(move |&c| self.is_in_bounds(c))
    }

    /// Opens the shared wall between two adjacent cells, clearing the flag on both sides.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if the passage was already open
    ///
    /// # Panics
    /// * If either coordinate is out of bounds
    /// * If the two cells are not adjacent
    pub fn open_passage(&mut self, a: Coord, b: Coord) -> bool {
        let (Some(idx_a), Some(idx_b)) = (self.ravel_index(a), self.ravel_index(b)) else {
            panic!("Cannot open a passage to a cell outside the grid: {a:?} -> {b:?}");
        };
        let Some(dir) = direction_between(a, b) else {
            panic!("Cells {a:?} and {b:?} are not adjacent");
        };
        let was_walled = self.data[idx_a][dir] || self.data[idx_b][dir.opposite()];
        self.data[idx_a][dir] = false;
        self.data[idx_b][dir.opposite()] = false;
        was_walled
    }

    /// Whether `a` and `b` are adjacent and connected by an open passage.
    pub fn is_open(&self, a: Coord, b: Coord) -> bool {
        match (self.get_cell(a.0, a.1), self.get_cell(b.0, b.1), direction_between(a, b)) {
            (Some(cell_a), Some(cell_b), Some(dir)) => !cell_a[dir] && !cell_b[dir.opposite()],
            _ => false,
        }
    }

    /// Every open passage exactly once, as `(cell, east or south neighbor)`.
    pub fn passages(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.coords().flat_map(move |coord| {
            [Direction::East, Direction::South]
                .into_iter()
                .filter_map(move |dir| dir.step(coord).map(|next| (coord, next)))
                .filter(move |&(a, b)| self.is_open(a, b))
        })
    }

    pub fn passage_count(&self) -> usize {
        self.passages().count()
    }

    /// Textual dump of every cell: each direction's neighbor coordinate (or `-` at the
    /// border) and whether that side is walled or open.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for coord in self.coords() {
            let cell = &self[coord];
            let _ = write!(out, "({}, {})", coord.0, coord.1);
            for dir in Direction::ALL {
                let neighbor = match dir.step(coord).filter(|&c| self.is_in_bounds(c)) {
                    Some(next) => format!("({}, {})", next.0, next.1),
                    None => "-".to_string(),
                };
                let state = if cell[dir] { "wall" } else { "open" };
                let _ = write!(out, " {}:{} {}", dir.initial(), neighbor, state);
            }
            out.push('\n');
        }
        out
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        match self.ravel_index(coord) {
            Some(idx) => &self.data[idx],
            None => panic!("Coordinate {coord:?} is out of bounds"),
        }
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        match self.ravel_index(coord) {
            Some(idx) => &mut self.data[idx],
            None => panic!("Coordinate {coord:?} is out of bounds"),
        }
    }
}

/// ASCII drawing: `+--+` for horizontal walls and `|` for vertical ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+")?;
        for x in 0..self.width {
            let top = if self[(x, 0)][Direction::North] { "--" } else { "  " };
            write!(f, "{top}+")?;
        }
        writeln!(f)?;

        for y in 0..self.height {
            let left = if self[(0, y)][Direction::West] { '|' } else { ' ' };
            write!(f, "{left}")?;
            for x in 0..self.width {
                let east = if self[(x, y)][Direction::East] { '|' } else { ' ' };
                write!(f, "  {east}")?;
            }
            writeln!(f)?;

            write!(f, "+")?;
            for x in 0..self.width {
                let south = if self[(x, y)][Direction::South] { "--" } else { "  " };
                write!(f, "{south}+")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
