use super::bucket::Bucket;
use super::grid::Grid;
use crate::Weight;
use crate::cards::Rank;

/// A maximal stretch of consecutive ranks sharing one nonzero weight,
/// listed strongest first.
struct Run {
    top: Rank,
    bottom: Rank,
    weight: Weight,
}

impl Run {
    /// Groups `(rank, weight)` pairs, given in descending rank order, into runs.
    fn collect(cells: impl Iterator<Item = (Rank, Weight)>) -> Vec<Run> {
        let mut runs = Vec::<Run>::new();
        let mut open = false;
        for (rank, weight) in cells {
            match runs.last_mut() {
                Some(run) if open && run.weight == weight => run.bottom = rank,
                _ if weight > 0.0 => runs.push(Run {
                    top: rank,
                    bottom: rank,
                    weight,
                }),
                _ => {}
            }
            open = weight > 0.0;
        }
        runs
    }

    fn suffix(&self) -> String {
        match self.weight == 1.0 {
            true => String::new(),
            false => format!(":{}", self.weight),
        }
    }
}

impl Grid {
    /// Renders the grid back into range notation.
    ///
    /// Pairs come first (`QQ+`, `99-66`, `22`), then one group per top
    /// rank: unmarked (`A2+`) when its suited and offsuit cells agree,
    /// otherwise separate `s` and `o` runs. Weights are clamped to 0..=1 and
    /// printed only when below 1. The result always passes validation and
    /// parses back to the same weights; it is not guaranteed to be the
    /// shortest such string.
    pub fn notation(&self) -> String {
        let weight = |bucket: Bucket| crate::weight(self.at(bucket)).clamp(0.0, 1.0);
        let mut segments = Run::collect(Rank::all().rev().map(|r| (r, weight(Bucket::pair(r)))))
            .into_iter()
            .map(|run| match (run.top == run.bottom, run.top == Rank::MAX) {
                (true, _) => format!("{0}{0}{1}", run.bottom, run.suffix()),
                (false, true) => format!("{0}{0}+{1}", run.bottom, run.suffix()),
                (false, false) => format!("{0}{0}-{1}{1}{2}", run.top, run.bottom, run.suffix()),
            })
            .collect::<Vec<_>>();
        for high in Rank::all().rev().filter(|r| *r != Rank::MIN) {
            let kickers = move || Rank::all().rev().filter(move |k| *k < high);
            let suited = kickers().map(|k| (k, weight(Bucket::suited(high, k)))).collect::<Vec<_>>();
            let offsuit = kickers().map(|k| (k, weight(Bucket::offsuit(high, k)))).collect::<Vec<_>>();
            if suited == offsuit {
                segments.extend(Self::kicker_runs(high, suited, ""));
            } else {
                segments.extend(Self::kicker_runs(high, suited, "s"));
                segments.extend(Self::kicker_runs(high, offsuit, "o"));
            }
        }
        segments.join(",")
    }

    fn kicker_runs(high: Rank, cells: Vec<(Rank, Weight)>, marker: &str) -> Vec<String> {
        Run::collect(cells.into_iter())
            .into_iter()
            .map(|run| match (run.top == run.bottom, run.top.next() == Some(high)) {
                (true, _) => format!("{}{}{}{}", high, run.bottom, marker, run.suffix()),
                (false, true) => format!("{}{}{}+{}", high, run.bottom, marker, run.suffix()),
                (false, false) => format!(
                    "{0}{1}{3}-{0}{2}{3}{4}",
                    high,
                    run.top,
                    run.bottom,
                    marker,
                    run.suffix()
                ),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::range::validate_str;

    fn grid(names: &[(&str, f32)]) -> Grid {
        let mut grid = Grid::default();
        for (name, percent) in names {
            let bucket = Bucket::all()
                .find(|b| b.to_string() == *name)
                .expect("bucket name");
            grid.put(bucket, *percent);
        }
        grid
    }

    #[test]
    fn empty() {
        assert_eq!(Grid::default().notation(), "");
    }

    #[test]
    fn pairs() {
        assert_eq!(grid(&[("AA", 100.0), ("KK", 100.0)]).notation(), "KK+");
        assert_eq!(grid(&[("KK", 100.0), ("QQ", 100.0)]).notation(), "KK-QQ");
        assert_eq!(grid(&[("TT", 100.0)]).notation(), "TT");
        assert_eq!(
            grid(&[("AA", 50.0), ("KK", 100.0), ("QQ", 100.0), ("JJ", 50.0)]).notation(),
            "AA:0.5,KK-QQ,JJ:0.5"
        );
        assert_eq!(grid(&[("AA", 100.0), ("QQ", 100.0)]).notation(), "AA,QQ");
    }

    #[test]
    fn kickers() {
        assert_eq!(
            grid(&[("AKs", 100.0), ("AKo", 100.0), ("AQs", 100.0), ("AQo", 100.0)]).notation(),
            "AQ+"
        );
        assert_eq!(
            grid(&[("AKs", 100.0), ("AKo", 100.0), ("AQs", 100.0), ("AQo", 100.0), ("AJs", 100.0)])
                .notation(),
            "AJs+,AQo+"
        );
        assert_eq!(grid(&[("72o", 50.0)]).notation(), "72o:0.5");
        assert_eq!(grid(&[("K9s", 100.0), ("K8s", 100.0)]).notation(), "K9s-K8s");
    }

    #[test]
    fn scenario() {
        let g = grid(&[("AA", 100.0), ("KK", 100.0), ("AKs", 50.0)]);
        assert_eq!(g.notation(), "KK+,AKs:0.5");
    }

    #[test]
    fn always_valid() {
        for _ in 0..32 {
            let notation = Grid::random().notation();
            assert!(validate_str(&notation).is_valid(), "{}", notation);
        }
    }

    #[test]
    fn out_of_bounds_cells_are_clamped() {
        assert_eq!(grid(&[("QQ", 140.0), ("JJ", -10.0)]).notation(), "QQ");
    }
}
