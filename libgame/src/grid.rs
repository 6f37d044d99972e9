use log::debug;
use rand::Rng;

use crate::{
    cell::{CellState, Variant},
    engine,
    pos::Position,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Grid of {width}x{height} cells doesn't fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("Expected {expected} cells for the grid dimensions, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },
}

/// A bounded (non-wrapping) grid of cells stored row-major, so the cell at `(x, y)` lives at
/// index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let cell_count = check_dimensions(width, height)?;

        Ok(Self::from_parts(
            width,
            height,
            vec![CellState::default(); cell_count],
        ))
    }

    /// Creates a grid seeded with up to `max_init_live_cells` live cells.
    ///
    /// Every draw picks a position and a variant independently; positions may repeat, in which
    /// case the last draw wins. A budget larger than the grid is therefore fine.
    pub fn new_random<R>(
        width: usize,
        height: usize,
        max_init_live_cells: usize,
        rng: &mut R,
    ) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        check_dimensions(width, height)?;

        Ok(Self::seeded(width, height, max_init_live_cells, rng))
    }

    /// Callers must pass dimensions that went through `check_dimensions`.
    pub(crate) fn seeded<R>(
        width: usize,
        height: usize,
        max_init_live_cells: usize,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut cells = vec![CellState::default(); width * height];

        for _ in 0..max_init_live_cells {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            let variant = Variant::random(rng);

            cells[y * width + x] = CellState::Alive(variant);
        }

        let grid = Self::from_parts(width, height, cells);

        debug!(
            "Seeded {width}x{height} grid with {} live cells from {max_init_live_cells} draws",
            grid.live_count()
        );

        grid
    }

    pub fn with_cells(
        width: usize,
        height: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, GridError> {
        let cell_count = check_dimensions(width, height)?;

        if cells.len() != cell_count {
            return Err(GridError::CellCountMismatch {
                expected: cell_count,
                actual: cells.len(),
            });
        }

        Ok(Self::from_parts(width, height, cells))
    }

    /// Callers must uphold `cells.len() == width * height` with non-zero dimensions.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn cell<P>(&self, pos: P) -> Option<CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Counts the live cells in the Moore neighbourhood of `pos`. Positions past the edges
    /// don't exist, so border cells have fewer than eight neighbours.
    pub fn neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
            [-1, -1],
            [0, -1],
            [1, -1],
            [-1, 0],
            [1, 0],
            [-1, 1],
            [0, 1],
            [1, 1],
        ];

        let center: Position = pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|[dx, dy]| self.cell(center.offset(*dx, *dy)?))
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }

    /// Advances the grid by one generation, replacing the whole cell buffer.
    pub fn step<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        *self = engine::step(self, rng);
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

/// Returns the cell count for valid dimensions.
fn check_dimensions(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }

    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}
