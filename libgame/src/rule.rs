use crate::cell::CellState;

/// The rules of the transition table, listed in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Fewer than two live neighbours, the cell dies.
    Underpopulation,

    /// A live cell with two or three live neighbours lives on (with a re-rolled variant).
    Survival,

    /// More than three live neighbours, the cell dies.
    Overpopulation,

    /// A dead cell with exactly three live neighbours comes alive.
    Reproduction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Dead,
    Alive,
}

impl Rule {
    /// Returns the first rule that applies, or `None` if the cell falls through the table
    /// (a dead cell with exactly two live neighbours), in which case it stays dead.
    ///
    /// The match arms are order-sensitive: `Reproduction` only sees dead cells because live
    /// ones with three neighbours were already taken by `Survival`.
    pub fn matching(current: CellState, population: usize) -> Option<Self> {
        match population {
            ..2 => Some(Rule::Underpopulation),
            2 | 3 if current.is_alive() => Some(Rule::Survival),
            4.. => Some(Rule::Overpopulation),
            3 => Some(Rule::Reproduction),
            _ => None,
        }
    }

    pub fn outcome(self) -> Outcome {
        match self {
            Rule::Underpopulation | Rule::Overpopulation => Outcome::Dead,
            Rule::Survival | Rule::Reproduction => Outcome::Alive,
        }
    }
}
