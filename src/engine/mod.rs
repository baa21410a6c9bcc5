pub mod local;
pub use local::*;

pub mod range;
pub use range::*;

pub mod seat;
pub use seat::*;

use crate::Weight;

/// Engine defines the boundary between the range layer and the solver that
/// owns authoritative range state.
///
/// Every call is a single request and a single reply. Weights cross this
/// boundary on the 0..=1 scale, in canonical bucket order. Errors mean the
/// call itself failed; a rejected range string or cell weight is a
/// successful call that returns a diagnostic.
#[async_trait::async_trait]
pub trait Engine: Send + Sync {
    /// Replaces `seat`'s range with `text`, or returns why it was refused.
    async fn parse(&self, seat: Seat, text: &str) -> anyhow::Result<Option<String>>;
    /// Current weights of all 169 buckets.
    async fn weights(&self, seat: Seat) -> anyhow::Result<Vec<Weight>>;
    /// Overwrites one cell of the 13x13 layout, or returns why it was refused.
    async fn update(&self, seat: Seat, row: usize, col: usize, weight: Weight) -> anyhow::Result<Option<String>>;
    /// Weights of all 1326 two-card combos, see [`Range::raw`] for the order.
    async fn raw(&self, seat: Seat) -> anyhow::Result<Vec<Weight>>;
    /// The engine's own rendering of the range.
    async fn notation(&self, seat: Seat) -> anyhow::Result<String>;
    /// Empties the range.
    async fn clear(&self, seat: Seat) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl<E> Engine for std::sync::Arc<E>
where
    E: Engine + ?Sized,
{
    async fn parse(&self, seat: Seat, text: &str) -> anyhow::Result<Option<String>> {
        self.as_ref().parse(seat, text).await
    }
    async fn weights(&self, seat: Seat) -> anyhow::Result<Vec<Weight>> {
        self.as_ref().weights(seat).await
    }
    async fn update(&self, seat: Seat, row: usize, col: usize, weight: Weight) -> anyhow::Result<Option<String>> {
        self.as_ref().update(seat, row, col, weight).await
    }
    async fn raw(&self, seat: Seat) -> anyhow::Result<Vec<Weight>> {
        self.as_ref().raw(seat).await
    }
    async fn notation(&self, seat: Seat) -> anyhow::Result<String> {
        self.as_ref().notation(seat).await
    }
    async fn clear(&self, seat: Seat) -> anyhow::Result<()> {
        self.as_ref().clear(seat).await
    }
}
