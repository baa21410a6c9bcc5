use super::Engine;
use super::range::Range;
use super::seat::Seat;
use crate::Weight;
use tokio::sync::Mutex;

/// In-process engine holding one authoritative [`Range`] per seat.
///
/// Safe to share behind an `Arc`; each call takes the lock for the
/// duration of a single operation.
#[derive(Debug, Default)]
pub struct Local {
    ranges: Mutex<[Range; crate::SEATS]>,
}

#[async_trait::async_trait]
impl Engine for Local {
    async fn parse(&self, seat: Seat, text: &str) -> anyhow::Result<Option<String>> {
        match text.parse::<Range>() {
            Ok(range) => {
                self.ranges.lock().await[usize::from(seat)] = range;
                log::debug!("{} range replaced", seat);
                Ok(None)
            }
            Err(e) => {
                log::debug!("{} range rejected: {}", seat, e);
                Ok(Some(e.to_string()))
            }
        }
    }
    async fn weights(&self, seat: Seat) -> anyhow::Result<Vec<Weight>> {
        Ok(self.ranges.lock().await[usize::from(seat)].weights())
    }
    async fn update(&self, seat: Seat, row: usize, col: usize, weight: Weight) -> anyhow::Result<Option<String>> {
        match self.ranges.lock().await[usize::from(seat)].update(row, col, weight) {
            Ok(()) => Ok(None),
            Err(e) => {
                log::debug!("{} cell ({}, {}) rejected: {}", seat, row, col, e);
                Ok(Some(e.to_string()))
            }
        }
    }
    async fn raw(&self, seat: Seat) -> anyhow::Result<Vec<Weight>> {
        Ok(self.ranges.lock().await[usize::from(seat)].raw())
    }
    async fn notation(&self, seat: Seat) -> anyhow::Result<String> {
        Ok(self.ranges.lock().await[usize::from(seat)].to_string())
    }
    async fn clear(&self, seat: Seat) -> anyhow::Result<()> {
        Ok(self.ranges.lock().await[usize::from(seat)].clear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parse_replaces_one_seat() {
        let engine = Local::default();
        assert!(engine.parse(Seat::OOP, "AA, KK").await.unwrap().is_none());
        let oop = engine.weights(Seat::OOP).await.unwrap();
        let ip = engine.weights(Seat::IP).await.unwrap();
        assert!(oop[0] == 1.0 && oop[14] == 1.0);
        assert!(ip.iter().all(|w| *w == 0.0));
        assert!(engine.notation(Seat::OOP).await.unwrap() == "KK+");
    }

    #[tokio::test]
    async fn rejection_keeps_previous_range() {
        let engine = Local::default();
        engine.parse(Seat::IP, "QQ").await.unwrap();
        let diagnostic = engine.parse(Seat::IP, "K2-K5").await.unwrap();
        assert!(diagnostic.is_some_and(|d| d.contains("K2-K5")));
        assert!(engine.notation(Seat::IP).await.unwrap() == "QQ");
    }

    #[tokio::test]
    async fn update_and_clear() {
        let engine = Local::default();
        assert!(engine.update(Seat::OOP, 0, 1, 0.5).await.unwrap().is_none());
        assert!(engine.weights(Seat::OOP).await.unwrap()[1] == 0.5);
        let diagnostic = engine.update(Seat::OOP, 0, 1, 2.0).await.unwrap();
        assert!(diagnostic.is_some_and(|d| d.contains("Invalid weight")));
        assert!(engine.weights(Seat::OOP).await.unwrap()[1] == 0.5);
        engine.clear(Seat::OOP).await.unwrap();
        assert!(engine.weights(Seat::OOP).await.unwrap().iter().all(|w| *w == 0.0));
    }

    #[tokio::test]
    async fn raw_covers_every_combo() {
        let engine = Local::default();
        engine.parse(Seat::IP, "AA,AKs:0.5").await.unwrap();
        let raw = engine.raw(Seat::IP).await.unwrap();
        assert!(raw.len() == crate::COMBOS);
        assert!(raw.iter().sum::<Weight>() == 8.0);
        assert!(engine.raw(Seat::OOP).await.unwrap().iter().all(|w| *w == 0.0));
    }
}
