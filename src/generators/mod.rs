use rand::{SeedableRng, rngs::StdRng};

mod prim;

pub use prim::randomized_prim;

use crate::maze::Grid;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves `grid` into a perfect maze. The same seed always yields the same maze.
pub fn generate_maze(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    randomized_prim(grid, &mut rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_repeats() {
        let mut first = Grid::new(9).unwrap();
        let mut second = Grid::new(9).unwrap();
        generate_maze(&mut first, Some(42));
        generate_maze(&mut second, Some(42));
        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(first.passage_count(), 80);
    }

    #[test]
    fn test_unseeded_generation_is_perfect() {
        let mut grid = Grid::new(6).unwrap();
        generate_maze(&mut grid, None);
        assert_eq!(grid.passage_count(), 35);
    }
}
