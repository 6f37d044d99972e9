//! Generational update. Every cell of the next generation is derived from the borrowed current
//! generation only, so a step is a pure function of the previous grid plus the random draws
//! used to pick live variants.

use rand::Rng;

use crate::{
    cell::CellState,
    grid::Grid,
    rule::{Outcome, Rule},
};

pub fn step<R>(grid: &Grid, rng: &mut R) -> Grid
where
    R: Rng + ?Sized,
{
    let next_cells = grid
        .enumerate_cells()
        .map(|(pos, cell)| next_cell(cell, grid.neighbor_count(pos), rng))
        .collect();

    Grid::from_parts(grid.width(), grid.height(), next_cells)
}

/// Applies the rule table to a single cell. Every live outcome gets a freshly drawn variant,
/// surviving cells included.
pub fn next_cell<R>(current: CellState, population: usize, rng: &mut R) -> CellState
where
    R: Rng + ?Sized,
{
    match Rule::matching(current, population).map(Rule::outcome) {
        Some(Outcome::Alive) => CellState::random_alive(rng),
        Some(Outcome::Dead) | None => CellState::Dead,
    }
}
