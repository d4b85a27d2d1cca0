//! Random initial patterns for the Life grid

use crate::life::{LifeError, LifeGrid};
use rand::prelude::*;

/// Scatters seed cells at uniformly random coordinates
pub struct RandomSeeder {
    rng: StdRng,
}

impl RandomSeeder {
    /// Fixed seed gives a reproducible sequence of patterns
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Seed `count` random cells. Collisions are allowed, so fewer distinct
    /// cells may end up scheduled.
    pub fn populate(&mut self, grid: &mut LifeGrid, count: usize) -> Result<(), LifeError> {
        let (w, h) = (grid.width(), grid.height());
        for _ in 0..count {
            let x = self.rng.gen_range(0..w);
            let y = self.rng.gen_range(0..h);
            grid.seed(x, y)?;
        }
        Ok(())
    }

    /// Wipe the grid, scatter a fresh pattern and commit it
    pub fn reseed(&mut self, grid: &mut LifeGrid, count: usize) -> Result<(), LifeError> {
        grid.reset();
        self.populate(grid, count)?;
        grid.advance();
        tracing::debug!(count, live = grid.live_cell_count(), "reseeded grid");
        Ok(())
    }
}
