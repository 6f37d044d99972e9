use rand::Rng;
use strum::{EnumCount, EnumIter};

/// One of the visually distinct live states. Variants carry no meaning for the rules,
/// they only let a renderer tell live cells apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
#[repr(u8)]
pub enum Variant {
    First = 1,
    Second = 2,
    Third = 3,
}

impl Variant {
    const ALL: [Variant; Variant::COUNT] = [Variant::First, Variant::Second, Variant::Third];

    /// Draws a variant uniformly at random.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::ALL[rng.random_range(0..Self::COUNT)]
    }

    /// The 1-based index of the variant.
    pub fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,

    Alive(Variant),
}

impl CellState {
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive(_))
    }

    /// 0 for dead cells, otherwise the variant index.
    pub fn value(self) -> u8 {
        match self {
            CellState::Dead => 0,
            CellState::Alive(variant) => variant.index(),
        }
    }

    pub fn random_alive<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        CellState::Alive(Variant::random(rng))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn variant_indices_are_one_based() {
        let indices = Variant::iter().map(Variant::index).collect::<Vec<_>>();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn random_variant_covers_every_variant() {
        let mut rng = StdRng::seed_from_u64(7);

        let seen = (0..300)
            .map(|_| Variant::random(&mut rng))
            .collect::<HashSet<_>>();

        assert_eq!(seen.len(), Variant::COUNT);
    }

    #[test]
    fn cell_values() {
        assert_eq!(CellState::default(), CellState::Dead);
        assert_eq!(CellState::Dead.value(), 0);
        assert!(!CellState::Dead.is_alive());

        for variant in Variant::iter() {
            let cell = CellState::Alive(variant);
            assert!(cell.is_alive());
            assert_eq!(cell.value(), variant.index());
        }
    }
}
