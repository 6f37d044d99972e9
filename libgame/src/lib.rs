use grid::{Grid, GridError};
use log::{debug, trace};
use rand::Rng;

pub mod cell;
pub mod engine;
pub mod grid;
pub mod pos;
pub mod rule;

/// A running simulation: the current grid, the random source feeding every draw, and how many
/// generations have passed since the grid was last seeded.
#[derive(Debug, Clone)]
pub struct Game<R> {
    grid: Grid,
    rng: R,
    generation: u64,
}

impl<R> Game<R>
where
    R: Rng,
{
    pub fn new(
        width: usize,
        height: usize,
        max_init_live_cells: usize,
        mut rng: R,
    ) -> Result<Self, GridError> {
        let grid = Grid::new_random(width, height, max_init_live_cells, &mut rng)?;
        Ok(Self::with_grid(grid, rng))
    }

    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            rng,
            generation: 0,
        }
    }

    pub fn tick(&mut self) {
        self.grid.step(&mut self.rng);
        self.generation += 1;

        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.grid.live_count()
        );
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Throws the current grid away and seeds a new one with the same dimensions.
    pub fn reseed(&mut self, max_init_live_cells: usize) {
        let (width, height) = self.grid.dimensions();

        self.grid = Grid::seeded(width, height, max_init_live_cells, &mut self.rng);
        self.generation = 0;

        debug!("Reseeded with {max_init_live_cells} draws");
    }

    pub fn resize(
        &mut self,
        width: usize,
        height: usize,
        max_init_live_cells: usize,
    ) -> Result<(), GridError> {
        self.grid = Grid::new_random(width, height, max_init_live_cells, &mut self.rng)?;
        self.generation = 0;

        debug!("Resized to {width}x{height}");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.reseed(0);
    }
}
