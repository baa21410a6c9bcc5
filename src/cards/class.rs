/// Suit-class of a starting hand.
///
/// Pairs carry no suit-class of their own; for two distinct ranks a hand is
/// either suited or offsuit.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Class {
    Pair,
    Suited,
    Offsuit,
}

impl Class {
    /// number of two-card combos a bucket of this class stands for
    pub const fn combos(&self) -> usize {
        match self {
            Class::Pair => 6,
            Class::Suited => 4,
            Class::Offsuit => 12,
        }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Class::Pair => "",
                Class::Suited => "s",
                Class::Offsuit => "o",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combos_cover_the_deck() {
        let total = 13 * Class::Pair.combos() + 78 * Class::Suited.combos() + 78 * Class::Offsuit.combos();
        assert!(total == 1326);
    }
}
