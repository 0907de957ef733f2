pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;

pub use error::{MazeError, Result};
pub use generators::{generate_maze, get_rng, randomized_prim};
pub use maze::{Coord, Direction, cell::Cell, grid::Grid};
