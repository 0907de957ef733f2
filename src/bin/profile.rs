use std::time::Instant;

use primaze::{Grid, generate_maze, logging::init_logging};

const PROFILE_SIZE: i32 = u8::MAX as i32;

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    let started = Instant::now();
    for iter in 0..num_iters {
        let mut grid = Grid::new(PROFILE_SIZE)?;
        let now = Instant::now();
        generate_maze(&mut grid, Some(iter as u64));
        tracing::info!(
            "[profile] iteration {} carved {} passages in {:?}",
            iter,
            grid.passage_count(),
            now.elapsed()
        );
    }
    tracing::info!("[profile] {} iterations took {:?}", num_iters, started.elapsed());
    Ok(())
}
