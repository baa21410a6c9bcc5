use crate::BUCKETS;
use crate::COMBOS;
use crate::RANKS;
use crate::Weight;
use crate::cards::Class;
use crate::range::Bucket;
use crate::range::Expression;
use crate::range::Grid;
use crate::range::canonicalize;
use crate::range::segments;

/// The engine's authoritative copy of one seat's range: a weight in
/// 0..=1 per bucket, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range([Weight; BUCKETS]);

impl Default for Range {
    fn default() -> Self {
        Self([0.0; BUCKETS])
    }
}

impl Range {
    pub fn get(&self, bucket: Bucket) -> Weight {
        self.0[bucket.index()]
    }

    /// Sets the weight of the cell at (row, col).
    pub fn update(&mut self, row: usize, col: usize, weight: Weight) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&weight) {
            anyhow::bail!("Invalid weight: {}", weight);
        }
        let bucket = Bucket::try_from((row, col)).map_err(|e| anyhow::anyhow!(e))?;
        self.0[bucket.index()] = weight;
        Ok(())
    }

    pub fn weights(&self) -> Vec<Weight> {
        self.0.to_vec()
    }

    /// Per-combo weights, one slot per unordered pair of distinct cards.
    ///
    /// Cards are numbered `4 * rank + suit`, so `2c2d2h2s` is 0..=3 and
    /// `AcAdAhAs` is 48..=51. The pair `a < b` sits at
    /// `a * (101 - a) / 2 + b - 1`. Every combo takes its bucket's weight.
    pub fn raw(&self) -> Vec<Weight> {
        let mut raw = vec![0.0; COMBOS];
        for bucket in Bucket::all() {
            let weight = self.get(bucket);
            for (a, b) in Self::cards(bucket) {
                raw[Self::slot(a, b)] = weight;
            }
        }
        raw
    }

    /// card pairs a bucket stands for, lower card first
    fn cards(bucket: Bucket) -> Vec<(u8, u8)> {
        let hi = bucket.high() as u8 * 4;
        let lo = bucket.low() as u8 * 4;
        let suits = || (0..4u8).flat_map(|s| (0..4u8).map(move |t| (s, t)));
        match bucket.class() {
            Class::Pair => suits().filter(|(s, t)| s < t).map(|(s, t)| (lo + s, hi + t)).collect(),
            Class::Suited => (0..4u8).map(|s| (lo + s, hi + s)).collect(),
            Class::Offsuit => suits().filter(|(s, t)| s != t).map(|(s, t)| (lo + s, hi + t)).collect(),
        }
    }
    fn slot(a: u8, b: u8) -> usize {
        let (a, b) = (a.min(b) as usize, a.max(b) as usize);
        a * (101 - a) / 2 + b - 1
    }
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| *w == 0.0)
    }
    pub fn clear(&mut self) {
        self.0 = [0.0; BUCKETS];
    }
}

/// Parses range notation with full semantics.
///
/// Beyond the grammar, this rejects reversed ranks (`89`), marked pairs
/// (`AAs`) and malformed intervals (`K2-K5`). Segments without a weight
/// count fully. When segments overlap, the leftmost one wins.
impl std::str::FromStr for Range {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = canonicalize(s);
        let mut range = Self::default();
        for segment in segments(&canonical).into_iter().rev() {
            let expression = segment
                .parse::<Expression>()
                .map_err(|e| anyhow::anyhow!(e))?;
            let weight = expression.weight().unwrap_or(1.0);
            for bucket in expression.buckets().map_err(|e| anyhow::anyhow!(e))? {
                range.0[bucket.index()] = weight;
            }
        }
        Ok(range)
    }
}

/// engine rendering shares the grid's notation
impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut grid = Grid::default();
        grid.absorb(&self.0).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", grid.notation())
    }
}

impl From<[[Weight; RANKS]; RANKS]> for Range {
    fn from(rows: [[Weight; RANKS]; RANKS]) -> Self {
        let mut range = Self::default();
        for (i, w) in rows.iter().flatten().enumerate() {
            range.0[i] = *w;
        }
        range
    }
}

impl From<&Grid> for Range {
    fn from(grid: &Grid) -> Self {
        let mut range = Self::default();
        for (i, w) in grid.weights().into_iter().enumerate() {
            range.0[i] = w;
        }
        range
    }
}
