#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const MAX: Self = Rank::Ace;
    pub const MIN: Self = Rank::Two;

    /// ascending, Two through Ace
    pub fn all() -> impl DoubleEndedIterator<Item = Rank> {
        (0..crate::RANKS as u8).map(|n| Rank::try_from(n).expect("rank index in bounds"))
    }

    /// position of this rank along either axis of the 13x13 grid,
    /// which lists Ace first
    pub fn axis(&self) -> usize {
        Self::MAX as usize - *self as usize
    }
    pub fn from_axis(i: usize) -> Option<Self> {
        (i < crate::RANKS)
            .then(|| Self::MAX as usize - i)
            .and_then(|n| Rank::try_from(n as u8).ok())
    }

    pub fn next(&self) -> Option<Self> {
        Rank::try_from(*self as u8 + 1).ok()
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Rank {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Rank::Two),
            1 => Ok(Rank::Three),
            2 => Ok(Rank::Four),
            3 => Ok(Rank::Five),
            4 => Ok(Rank::Six),
            5 => Ok(Rank::Seven),
            6 => Ok(Rank::Eight),
            7 => Ok(Rank::Nine),
            8 => Ok(Rank::Ten),
            9 => Ok(Rank::Jack),
            10 => Ok(Rank::Queen),
            11 => Ok(Rank::King),
            12 => Ok(Rank::Ace),
            _ => Err(format!("invalid rank index: {}", n)),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// char isomorphism
///
/// Only the uppercase face letters belong to range notation.
impl TryFrom<char> for Rank {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(format!("invalid rank char: {}", c)),
        }
    }
}
impl From<Rank> for char {
    fn from(r: Rank) -> char {
        match r {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

impl crate::Arbitrary for Rank {
    fn random() -> Self {
        Rank::try_from(rand::random::<u8>() % crate::RANKS as u8).expect("rank index in bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert!(rank == Rank::try_from(u8::from(rank)).unwrap());
    }

    #[test]
    fn bijective_char() {
        for rank in Rank::all() {
            assert!(rank == Rank::try_from(char::from(rank)).unwrap());
        }
    }

    #[test]
    fn lowercase_is_not_a_rank() {
        assert!(Rank::try_from('a').is_err());
        assert!(Rank::try_from('t').is_err());
        assert!(Rank::try_from('1').is_err());
    }

    #[test]
    fn axis_lists_ace_first() {
        assert!(Rank::Ace.axis() == 0);
        assert!(Rank::Two.axis() == 12);
        assert!(Rank::from_axis(4) == Some(Rank::Ten));
        assert!(Rank::from_axis(13) == None);
    }

    #[test]
    fn neighbors() {
        assert!(Rank::Ace.next() == None);
        assert!(Rank::Nine.next() == Some(Rank::Ten));
    }
}
