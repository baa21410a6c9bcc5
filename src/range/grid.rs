use super::bucket::Bucket;
use crate::BUCKETS;
use crate::Percent;
use crate::RANKS;
use crate::Weight;

/// A seat's range as the 13x13 table the user sees and edits.
///
/// Cells hold [`Percent`] values in canonical row-major order (see
/// [`Bucket`] for the layout). Every bucket always has a cell; a bucket
/// outside the range holds 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid([Percent; BUCKETS]);

impl Default for Grid {
    fn default() -> Self {
        Self([0.0; BUCKETS])
    }
}

impl Grid {
    pub fn get(&self, row: usize, col: usize) -> Option<Percent> {
        (row < RANKS && col < RANKS).then(|| self.0[row * RANKS + col])
    }
    /// Overwrites one cell and returns what it held. The value is not
    /// clamped here; bounds are the engine's to enforce.
    pub fn set(&mut self, row: usize, col: usize, percent: Percent) -> Result<Percent, String> {
        match row < RANKS && col < RANKS {
            true => Ok(std::mem::replace(&mut self.0[row * RANKS + col], percent)),
            false => Err(format!("cell out of bounds: ({}, {})", row, col)),
        }
    }
    pub fn at(&self, bucket: Bucket) -> Percent {
        self.0[bucket.index()]
    }
    pub fn put(&mut self, bucket: Bucket, percent: Percent) {
        self.0[bucket.index()] = percent;
    }

    /// Replaces every cell with engine weights given in canonical order.
    pub fn absorb(&mut self, weights: &[Weight]) -> Result<(), String> {
        if weights.len() != BUCKETS {
            return Err(format!(
                "expected {} bucket weights, got {}",
                BUCKETS,
                weights.len()
            ));
        }
        for (cell, weight) in self.0.iter_mut().zip(weights) {
            *cell = crate::percent(*weight);
        }
        Ok(())
    }
    /// cells on the engine's scale, canonical order
    pub fn weights(&self) -> Vec<Weight> {
        self.0.iter().copied().map(crate::weight).collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Bucket, Percent)> + '_ {
        Bucket::all().zip(self.0.iter().copied())
    }

    /// weighted number of two-card combos in the range, out of 1326
    pub fn combos(&self) -> f32 {
        self.cells()
            .map(|(bucket, p)| bucket.combos() as f32 * crate::weight(p))
            .sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|p| *p == 0.0)
    }
    pub fn clear(&mut self) {
        self.0 = [0.0; BUCKETS];
    }
}

/// 13 lines of 13 right-aligned cells
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.0.chunks(RANKS) {
            let line = row
                .iter()
                .map(|p| format!("{:>5.1}", p))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Grid {
    /// sparse grid of quarter-step weights
    fn random() -> Self {
        let mut grid = Self::default();
        for bucket in Bucket::all() {
            if rand::random::<bool>() {
                grid.put(bucket, (rand::random::<u8>() % 5) as Percent * 25.0);
            }
        }
        grid
    }
}
