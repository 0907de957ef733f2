use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Grid side length must be positive and small enough to allocate.
    #[error("Invalid grid size {0}, expected a positive side length")]
    InvalidSize(i32),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<MazeError> for std::io::Error {
    fn from(err: MazeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

pub type Result<T> = core::result::Result<T, MazeError>;
