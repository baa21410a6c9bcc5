use super::bucket::Bucket;
use crate::Weight;
use crate::cards::Rank;
use once_cell::sync::Lazy;
use regex::Regex;

const COMBO_PAT: &str = r"(?:[AKQJT2-9]{2}[os]?)";
const WEIGHT_PAT: &str = r"(?:(?:[01](?:\.\d*)?)|(?:\.\d+))";

/// One comma-free segment of range notation:
/// a combo, optionally `+` or `-combo`, optionally `:weight`.
static RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<range>{COMBO_PAT}(?:\+|(?:-{COMBO_PAT}))?)(?::(?P<weight>{WEIGHT_PAT}))?$"
    ))
    .expect("range pattern compiles")
});

/// Suit-class marker trailing a combo token.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Marker {
    Suited,
    Offsuit,
    /// no marker: suited and offsuit alike
    Both,
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Marker::Suited => write!(f, "s"),
            Marker::Offsuit => write!(f, "o"),
            Marker::Both => Ok(()),
        }
    }
}

/// Two rank characters and a marker, exactly as written.
///
/// The grammar does not order the ranks or forbid `AAs`;
/// [`Token::buckets`] is where those are checked.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Token {
    first: Rank,
    second: Rank,
    marker: Marker,
}

impl Token {
    pub fn marker(&self) -> Marker {
        self.marker
    }
    fn gap(&self) -> u8 {
        self.first as u8 - self.second as u8
    }

    /// ranks high-then-low, rejecting reversed ranks and marked pairs
    fn checked(&self) -> Result<(), String> {
        if self.first < self.second {
            return Err(format!("First rank must be equal or higher than second rank: {}", self));
        }
        if self.first == self.second && self.marker != Marker::Both {
            return Err(format!("Pair with suitedness is not allowed: {}", self));
        }
        Ok(())
    }

    /// buckets at ranks `high` and `low` under a marker
    fn expand(marker: Marker, high: Rank, low: Rank) -> Vec<Bucket> {
        match (high == low, marker) {
            (true, _) => vec![Bucket::pair(high)],
            (false, Marker::Suited) => vec![Bucket::suited(high, low)],
            (false, Marker::Offsuit) => vec![Bucket::offsuit(high, low)],
            (false, Marker::Both) => vec![Bucket::suited(high, low), Bucket::offsuit(high, low)],
        }
    }

    pub fn buckets(&self) -> Result<Vec<Bucket>, String> {
        self.checked()?;
        Ok(Self::expand(self.marker, self.first, self.second))
    }
}

impl TryFrom<&str> for Token {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let first = chars.next().ok_or("empty combo")?;
        let second = chars.next().ok_or_else(|| format!("incomplete combo: {}", s))?;
        let marker = match chars.next() {
            None => Marker::Both,
            Some('s') => Marker::Suited,
            Some('o') => Marker::Offsuit,
            Some(c) => return Err(format!("invalid suitedness: {}", c)),
        };
        match chars.next() {
            Some(_) => Err(format!("trailing characters in combo: {}", s)),
            None => Ok(Self {
                first: Rank::try_from(first)?,
                second: Rank::try_from(second)?,
                marker,
            }),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.first, self.second, self.marker)
    }
}

/// Shape of a segment before its weight.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Shape {
    /// `AKs`
    Single(Token),
    /// `JJ+`, `ATo+`: the token and every stronger hand of its kind
    AtLeast(Token),
    /// `AA-22`, `A5s-A2s`: stronger endpoint first
    Interval(Token, Token),
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Shape::Single(t) => write!(f, "{}", t),
            Shape::AtLeast(t) => write!(f, "{}+", t),
            Shape::Interval(a, b) => write!(f, "{}-{}", a, b),
        }
    }
}

/// A parsed segment of range notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    shape: Shape,
    weight: Option<Weight>,
}

impl Expression {
    pub fn shape(&self) -> Shape {
        self.shape
    }
    /// explicit weight, if the segment carried one
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// Resolves the shape into the buckets it covers.
    ///
    /// Pairs and connectors climb diagonally (`88+`, `T9s+`, `88-55`,
    /// `KQo-JTo`); other hands climb the kicker under a fixed top rank
    /// (`ATo+`, `A5s-A2s`).
    pub fn buckets(&self) -> Result<Vec<Bucket>, String> {
        match self.shape {
            Shape::Single(token) => token.buckets(),
            Shape::AtLeast(token) => {
                token.checked()?;
                let gap = token.gap();
                let (high, low) = (token.first as u8, token.second as u8);
                let pairs = match gap {
                    0 | 1 => (high..=Rank::MAX as u8)
                        .map(|i| (i, i - gap))
                        .collect::<Vec<_>>(),
                    _ => (low..high).map(|i| (high, i)).collect::<Vec<_>>(),
                };
                Ok(Self::collect(token.marker, pairs))
            }
            Shape::Interval(top, bottom) => {
                top.checked()?;
                bottom.checked()?;
                if top.marker != bottom.marker {
                    return Err(format!("Suitedness does not match: {}", self.shape));
                }
                let (t1, t2) = (top.first as u8, top.second as u8);
                let (b1, b2) = (bottom.first as u8, bottom.second as u8);
                if top.gap() == bottom.gap() && t1 > b1 {
                    let gap = top.gap();
                    Ok(Self::collect(top.marker, (b1..=t1).map(|i| (i, i - gap)).collect()))
                } else if t1 == b1 && t2 > b2 {
                    Ok(Self::collect(top.marker, (b2..=t2).map(|i| (t1, i)).collect()))
                } else {
                    Err(format!("Invalid range: {}", self.shape))
                }
            }
        }
    }

    fn collect(marker: Marker, pairs: Vec<(u8, u8)>) -> Vec<Bucket> {
        pairs
            .into_iter()
            .flat_map(|(h, l)| {
                let high = Rank::try_from(h).expect("rank index in bounds");
                let low = Rank::try_from(l).expect("rank index in bounds");
                Token::expand(marker, high, low)
            })
            .collect()
    }
}

impl std::str::FromStr for Expression {
    type Err = String;
    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let caps = RANGE_REGEX
            .captures(segment)
            .ok_or_else(|| format!("Failed to parse range: {}", segment))?;
        let range = caps.name("range").map(|m| m.as_str()).unwrap_or_default();
        let weight = match caps.name("weight") {
            None => None,
            Some(m) => match m.as_str().parse::<Weight>() {
                Ok(w) if (0.0..=1.0).contains(&w) => Some(w),
                _ => return Err(format!("Invalid weight: {}", m.as_str())),
            },
        };
        let shape = if let Some((top, bottom)) = range.split_once('-') {
            let top = Token::try_from(top)?;
            let bottom = Token::try_from(bottom)?;
            if top.marker != bottom.marker {
                return Err(format!("Suitedness does not match: {}", range));
            }
            Shape::Interval(top, bottom)
        } else if let Some(token) = range.strip_suffix('+') {
            Shape::AtLeast(Token::try_from(token)?)
        } else {
            Shape::Single(Token::try_from(range)?)
        };
        Ok(Self { shape, weight })
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{}:{}", self.shape, w),
            None => write!(f, "{}", self.shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(s: &str) -> Vec<String> {
        let mut names = s
            .parse::<Expression>()
            .unwrap()
            .buckets()
            .unwrap()
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>();
        names.sort();
        names
    }
    fn sorted(s: &[&str]) -> Vec<String> {
        let mut names = s.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        names.sort();
        names
    }

    #[test]
    fn range_regex() {
        let tests = [
            ("AK", Some(("AK", None))),
            ("K9s:.67", Some(("K9s", Some(".67")))),
            ("88+:1.", Some(("88+", Some("1.")))),
            ("98s-65s:0.25", Some(("98s-65s", Some("0.25")))),
            ("ak", None),
            ("AKQ", None),
            ("AK+-AJ", None),
            ("K9s.67", None),
            ("88+:2.0", None),
            ("98s-21s", None),
        ];
        for (s, expected) in tests {
            match expected {
                Some((range, weight)) => {
                    let caps = RANGE_REGEX.captures(s).unwrap();
                    assert_eq!(caps.name("range").unwrap().as_str(), range);
                    assert_eq!(caps.name("weight").map(|m| m.as_str()), weight);
                }
                None => assert!(!RANGE_REGEX.is_match(s), "{}", s),
            }
        }
    }

    #[test]
    fn shapes() {
        let single = "AKs".parse::<Expression>().unwrap();
        assert!(matches!(single.shape(), Shape::Single(t) if t.marker() == Marker::Suited));
        assert!(single.weight() == None);
        let plus = "JJ+".parse::<Expression>().unwrap();
        assert!(matches!(plus.shape(), Shape::AtLeast(_)));
        let dash = "AA-22".parse::<Expression>().unwrap();
        assert!(matches!(dash.shape(), Shape::Interval(_, _)));
        let weighted = "72o:0.5".parse::<Expression>().unwrap();
        assert!(weighted.weight() == Some(0.5));
    }

    #[test]
    fn weights_are_bounded() {
        assert!("AA:1.5".parse::<Expression>().is_err());
        assert!("AA:1.0".parse::<Expression>().is_ok());
        assert!("AA:0".parse::<Expression>().is_ok());
        assert!("AA:.5".parse::<Expression>().is_ok());
        assert!("AA:1.".parse::<Expression>().is_ok());
        assert!("AA:-0.5".parse::<Expression>().is_err());
    }

    #[test]
    fn interval_markers_must_agree() {
        assert!("AQo-86s".parse::<Expression>().is_err());
        assert!("AQo-86o".parse::<Expression>().is_ok());
    }

    #[test]
    fn display_round_trip() {
        for s in ["AKs", "JJ+", "A5s-A2s", "72o:0.5", "K9:0.25"] {
            assert_eq!(s.parse::<Expression>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn plus_desugars() {
        assert_eq!(names("88+"), sorted(&["AA", "KK", "QQ", "JJ", "TT", "99", "88"]));
        assert_eq!(names("98s+"), sorted(&["AKs", "KQs", "QJs", "JTs", "T9s", "98s"]));
        assert_eq!(names("A8o+"), sorted(&["AKo", "AQo", "AJo", "ATo", "A9o", "A8o"]));
        assert_eq!(names("KQ+"), sorted(&["AKs", "AKo", "KQs", "KQo"]));
    }

    #[test]
    fn dash_desugars() {
        assert_eq!(names("88-55"), sorted(&["88", "77", "66", "55"]));
        assert_eq!(names("98s-65s"), sorted(&["98s", "87s", "76s", "65s"]));
        assert_eq!(
            names("AQo-86o"),
            sorted(&["AQo", "KJo", "QTo", "J9o", "T8o", "97o", "86o"])
        );
        assert_eq!(
            names("K5-K2"),
            sorted(&["K5s", "K5o", "K4s", "K4o", "K3s", "K3o", "K2s", "K2o"])
        );
        assert_eq!(names("AA-22").len(), 13);
    }

    #[test]
    fn semantic_errors() {
        for s in ["89", "AAo", "AQo-AQo", "AQo-KQo", "K2-K5", "22-AA"] {
            assert!(s.parse::<Expression>().unwrap().buckets().is_err(), "{}", s);
        }
    }
}
