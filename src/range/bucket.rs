use crate::cards::Class;
use crate::cards::Rank;

/// One of the 169 starting-hand categories: a pair, or two distinct ranks
/// that are either suited or offsuit.
///
/// Buckets live at fixed cells of the 13x13 layout. Rows and columns list
/// ranks from Ace down to Two, pairs sit on the diagonal, suited hands above
/// it and offsuit hands below it:
///
/// ```text
///        A    K    Q   ..
///   A   AA  AKs  AQs
///   K  AKo   KK  KQs
///   Q  AQo  KQo   QQ
/// ```
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Bucket {
    high: Rank,
    low: Rank,
    class: Class,
}

impl Bucket {
    pub fn pair(rank: Rank) -> Self {
        Self {
            high: rank,
            low: rank,
            class: Class::Pair,
        }
    }
    /// Suited bucket of two ranks, in either order.
    ///
    /// # Panics
    /// if `a == b`; use [`Bucket::pair`] for pairs.
    pub fn suited(a: Rank, b: Rank) -> Self {
        assert!(a != b, "suited bucket needs distinct ranks");
        Self {
            high: a.max(b),
            low: a.min(b),
            class: Class::Suited,
        }
    }
    /// Offsuit bucket of two ranks, in either order.
    ///
    /// # Panics
    /// if `a == b`; use [`Bucket::pair`] for pairs.
    pub fn offsuit(a: Rank, b: Rank) -> Self {
        assert!(a != b, "offsuit bucket needs distinct ranks");
        Self {
            high: a.max(b),
            low: a.min(b),
            class: Class::Offsuit,
        }
    }

    pub fn high(&self) -> Rank {
        self.high
    }
    pub fn low(&self) -> Rank {
        self.low
    }
    pub fn class(&self) -> Class {
        self.class
    }
    pub fn combos(&self) -> usize {
        self.class.combos()
    }

    /// (row, col) of this bucket in the 13x13 layout
    pub fn position(&self) -> (usize, usize) {
        match self.class {
            Class::Pair => (self.high.axis(), self.high.axis()),
            Class::Suited => (self.high.axis(), self.low.axis()),
            Class::Offsuit => (self.low.axis(), self.high.axis()),
        }
    }
    /// row-major offset of this bucket's cell
    pub fn index(&self) -> usize {
        let (row, col) = self.position();
        row * crate::RANKS + col
    }

    /// all 169 buckets in canonical row-major order
    pub fn all() -> impl Iterator<Item = Bucket> {
        (0..crate::BUCKETS).map(|i| Bucket::try_from(i).expect("index in bounds"))
    }
}

/// (row, col) isomorphism
impl TryFrom<(usize, usize)> for Bucket {
    type Error = String;
    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        let r = Rank::from_axis(row).ok_or_else(|| format!("row out of bounds: {}", row))?;
        let c = Rank::from_axis(col).ok_or_else(|| format!("col out of bounds: {}", col))?;
        Ok(match row.cmp(&col) {
            std::cmp::Ordering::Equal => Self::pair(r),
            std::cmp::Ordering::Less => Self::suited(r, c),
            std::cmp::Ordering::Greater => Self::offsuit(r, c),
        })
    }
}

/// usize isomorphism over the row-major layout
impl TryFrom<usize> for Bucket {
    type Error = String;
    fn try_from(i: usize) -> Result<Self, Self::Error> {
        match i {
            i if i < crate::BUCKETS => Self::try_from((i / crate::RANKS, i % crate::RANKS)),
            _ => Err(format!("bucket index out of bounds: {}", i)),
        }
    }
}
impl From<Bucket> for usize {
    fn from(b: Bucket) -> usize {
        b.index()
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.high, self.low, self.class)
    }
}

impl crate::Arbitrary for Bucket {
    fn random() -> Self {
        Bucket::try_from(rand::random::<u32>() as usize % crate::BUCKETS).expect("index in bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_index() {
        let bucket = Bucket::random();
        assert!(bucket == Bucket::try_from(usize::from(bucket)).unwrap());
    }

    #[test]
    fn cardinality() {
        let all = Bucket::all().collect::<Vec<_>>();
        assert!(all.len() == 169);
        assert!(all.iter().filter(|b| b.class() == Class::Pair).count() == 13);
        assert!(all.iter().filter(|b| b.class() == Class::Suited).count() == 78);
        assert!(all.iter().filter(|b| b.class() == Class::Offsuit).count() == 78);
        assert!(all.iter().map(Bucket::combos).sum::<usize>() == 1326);
    }

    #[test]
    fn canonical_layout() {
        assert!(Bucket::try_from(0).unwrap().to_string() == "AA");
        assert!(Bucket::try_from(1).unwrap().to_string() == "AKs");
        assert!(Bucket::try_from(13).unwrap().to_string() == "AKo");
        assert!(Bucket::try_from(14).unwrap().to_string() == "KK");
        assert!(Bucket::try_from(168).unwrap().to_string() == "22");
        assert!(Bucket::try_from((12, 0)).unwrap().to_string() == "A2o");
        assert!(Bucket::try_from((0, 12)).unwrap().to_string() == "A2s");
    }

    #[test]
    fn rank_order_is_normalized() {
        assert!(Bucket::suited(Rank::Two, Rank::Seven) == Bucket::suited(Rank::Seven, Rank::Two));
        assert!(Bucket::offsuit(Rank::Two, Rank::Seven).to_string() == "72o");
    }

    #[test]
    #[should_panic(expected = "distinct ranks")]
    fn suited_pair_panics() {
        Bucket::suited(Rank::Nine, Rank::Nine);
    }

    #[test]
    fn out_of_bounds() {
        assert!(Bucket::try_from(169).is_err());
        assert!(Bucket::try_from((13, 0)).is_err());
    }
}
