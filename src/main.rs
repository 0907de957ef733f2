use std::io::Write;

use crossterm::{cursor, queue, terminal};
use primaze::{Grid, config::Config, generate_maze, logging::init_logging};

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let config = Config::from_args(std::env::args().skip(1))?;
    tracing::info!("Generating a {0}x{0} maze (seed: {1:?})", config.size, config.seed);

    let mut grid = Grid::new(config.size)?;
    generate_maze(&mut grid, config.seed);
    tracing::info!("Opened {} passages", grid.passage_count());

    let mut stdout = std::io::stdout();
    if config.dump {
        write!(stdout, "{}", grid.dump())?;
    } else {
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
        write!(stdout, "{grid}")?;
    }
    stdout.flush()?;
    Ok(())
}
