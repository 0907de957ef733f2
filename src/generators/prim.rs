use std::collections::HashSet;

use rand::Rng;

use crate::maze::{Coord, Grid};

/// A candidate passage from a cell already in the maze to one of its neighbors.
type Wall = (Coord, Coord);

/// Randomized Prim's algorithm.
///
/// Grows the maze from a random cell. Each step takes a random wall off the frontier
/// and, if the cell on its far side is not yet part of the maze, opens the wall and
/// pushes that cell's walls onto the frontier. Walls leading back into the maze are
/// kept on the frontier and dropped when drawn.
///
/// Expects a fully walled grid; the result is a spanning tree over all cells.
pub fn randomized_prim<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let start = grid.coord_of(rng.random_range(0..grid.len()));
    tracing::debug!("[prim] starting at {:?} on a {}x{} grid", start, grid.width(), grid.height());

    let mut visited: HashSet<Coord> = HashSet::with_capacity(grid.len());
    visited.insert(start);

    let mut frontier: Vec<Wall> = grid.neighbors(start).map(|n| (start, n)).collect();
    let mut discarded = 0usize;

    while !frontier.is_empty() {
        // Randomly pick a wall, swap_remove keeps removal O(1)
        let idx = rng.random_range(0..frontier.len());
        let (from, to) = frontier.swap_remove(idx);

        if !visited.insert(to) {
            // Both sides are already in the maze, opening would make a cycle
            discarded += 1;
            continue;
        }

        grid.open_passage(from, to);
        tracing::trace!("[prim] opened {:?} -> {:?}", from, to);

        frontier.extend(grid.neighbors(to).map(|n| (to, n)));
    }

    tracing::debug!(
        "[prim] done: {} cells visited, {} walls discarded",
        visited.len(),
        discarded
    );
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{RngCore, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::maze::Direction;

    fn carved(size: i32, seed: u64) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        randomized_prim(&mut grid, &mut rng);
        grid
    }

    /// Number of cells reachable from (0, 0) through open passages.
    fn reachable(grid: &Grid) -> usize {
        let mut seen = HashSet::from([(0, 0)]);
        let mut queue = VecDeque::from([(0, 0)]);
        while let Some(coord) = queue.pop_front() {
            for next in grid.neighbors(coord).collect::<Vec<_>>() {
                if grid.is_open(coord, next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn test_single_cell() {
        let grid = carved(1, 0);
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.get_cell(0, 0).unwrap().is_fully_walled());
    }

    #[test]
    fn test_two_by_two() {
        let grid = carved(2, 7);
        assert_eq!(grid.passage_count(), 3);
        assert_eq!(reachable(&grid), 4);
        // Exactly one of the four internal walls stays closed
        let internal = [
            ((0, 0), (1, 0)),
            ((0, 1), (1, 1)),
            ((0, 0), (0, 1)),
            ((1, 0), (1, 1)),
        ];
        let closed = internal.iter().filter(|&&(a, b)| !grid.is_open(a, b)).count();
        assert_eq!(closed, 1);
    }

    #[test]
    fn test_spanning_tree() {
        for size in 1..=12 {
            for seed in 0..4 {
                let grid = carved(size, seed);
                let cells = (size * size) as usize;
                assert_eq!(grid.passage_count(), cells - 1, "size {size} seed {seed}");
                assert_eq!(reachable(&grid), cells, "size {size} seed {seed}");
            }
        }
    }

    #[test]
    fn test_walls_are_symmetric() {
        let grid = carved(10, 3);
        for coord in grid.coords() {
            for dir in Direction::ALL {
                let next = dir.step(coord).unwrap();
                let Some(other) = grid.get_cell(next.0, next.1) else {
                    // Border walls are never opened
                    assert!(grid[coord][dir]);
                    continue;
                };
                assert_eq!(grid[coord][dir], other[dir.opposite()]);
            }
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let first = carved(15, 1234);
        let second = carved(15, 1234);
        let walls = |grid: &Grid| grid.cells().iter().map(|c| c.walls()).collect::<Vec<_>>();
        assert_eq!(walls(&first), walls(&second));
    }

    #[test]
    fn test_accepts_trait_object_rng() {
        let mut grid = Grid::new(5).unwrap();
        let mut seeded = StdRng::seed_from_u64(5);
        let rng: &mut dyn RngCore = &mut seeded;
        randomized_prim(&mut grid, rng);
        assert_eq!(grid.passage_count(), 24);
        assert_eq!(grid.to_string(), carved(5, 5).to_string());
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = carved(15, 1);
        let second = carved(15, 2);
        assert_ne!(first.to_string(), second.to_string());
    }
}
