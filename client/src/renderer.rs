use itertools::Itertools;
use libgame::{Game, cell::CellState};
use rand::Rng;

/// Indexed by `CellState::value()`: dead first, then one glyph per variant.
const GLYPHS: [char; 4] = ['.', '#', '@', '%'];

fn glyph(cell: CellState) -> char {
    GLYPHS
        .get(usize::from(cell.value()))
        .copied()
        .unwrap_or('?')
}

/// Draws the grid as text, one row per line, under a generation header.
pub fn render<R>(game: &Game<R>) -> String
where
    R: Rng,
{
    let grid = game.grid();

    let rows = grid
        .cells()
        .chunks(grid.width())
        .map(|row| row.iter().copied().map(glyph).collect::<String>())
        .join("\n");

    format!(
        "generation {} ({} alive)\n{rows}",
        game.generation(),
        grid.live_count()
    )
}

#[cfg(test)]
mod tests {
    use libgame::{cell::Variant, grid::Grid};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn renders_rows_and_variants() {
        let cells = vec![
            CellState::Alive(Variant::First),
            CellState::Dead,
            CellState::Alive(Variant::Second),
            CellState::Dead,
            CellState::Alive(Variant::Third),
            CellState::Dead,
        ];
        let grid = Grid::with_cells(3, 2, cells).unwrap();
        let game = Game::with_grid(grid, StdRng::seed_from_u64(0));

        assert_eq!(render(&game), "generation 0 (3 alive)\n#.@\n.%.");
    }

    #[test]
    fn every_state_has_its_own_glyph() {
        let glyphs = [
            CellState::Dead,
            CellState::Alive(Variant::First),
            CellState::Alive(Variant::Second),
            CellState::Alive(Variant::Third),
        ]
        .map(glyph);

        assert_eq!(glyphs, GLYPHS);
        assert!(!glyphs.contains(&'?'));
    }
}
