/// The two players of a postflop spot, each owning one range.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Seat {
    /// out of position, acts first
    OOP = 0,
    /// in position
    IP = 1,
}

impl Seat {
    pub fn all() -> [Seat; crate::SEATS] {
        [Seat::OOP, Seat::IP]
    }
}

/// usize isomorphism
impl TryFrom<usize> for Seat {
    type Error = String;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Seat::OOP),
            1 => Ok(Seat::IP),
            _ => Err(format!("invalid seat: {}", n)),
        }
    }
}
impl From<Seat> for usize {
    fn from(s: Seat) -> usize {
        s as usize
    }
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Seat {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oop" | "0" => Ok(Seat::OOP),
            "ip" | "1" => Ok(Seat::IP),
            other => Err(format!("invalid seat: {}", other)),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Seat::OOP => write!(f, "OOP"),
            Seat::IP => write!(f, "IP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        for seat in Seat::all() {
            assert!(seat == Seat::try_from(usize::from(seat)).unwrap());
        }
        assert!(Seat::try_from(2usize).is_err());
    }

    #[test]
    fn parse_str() {
        assert!(Seat::try_from("oop") == Ok(Seat::OOP));
        assert!(Seat::try_from(" IP ") == Ok(Seat::IP));
        assert!(Seat::try_from("btn").is_err());
    }
}
