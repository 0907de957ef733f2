use crate::error::{MazeError, Result};

pub const DEFAULT_SIZE: i32 = 10;

/// Options for the `primaze` driver, read from positional arguments:
/// `primaze [--dump] [size] [seed]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: i32,
    pub seed: Option<u64>,
    /// Print the per-cell dump instead of the drawing.
    pub dump: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            dump: false,
        }
    }
}

impl Config {
    /// Parses arguments, not including the executable name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = Config::default();
        let mut positional = 0;
        for arg in args {
            let arg = arg.as_ref();
            if arg == "--dump" {
                config.dump = true;
                continue;
            }
            match positional {
                0 => {
                    config.size = arg.parse::<i32>().map_err(|_| {
                        MazeError::InvalidArgument(format!("size must be an integer, got {arg:?}"))
                    })?;
                }
                1 => {
                    config.seed = Some(arg.parse::<u64>().map_err(|_| {
                        MazeError::InvalidArgument(format!("seed must be an unsigned integer, got {arg:?}"))
                    })?);
                }
                _ => {
                    return Err(MazeError::InvalidArgument(format!("unexpected argument {arg:?}")));
                }
            }
            positional += 1;
        }
        Ok(config)
    }
}
