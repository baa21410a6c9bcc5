pub mod config;
pub use config::*;

pub mod failure;
pub use failure::*;

use crate::Percent;
use crate::SEATS;
use crate::engine::Engine;
use crate::engine::Seat;
use crate::range::Grid;
use crate::range::canonicalize;
use crate::range::validate;
use serde_json::Value;

/// Front-end state for one session: a grid per seat mirroring the
/// engine's ranges, plus the tree configuration.
///
/// The engine stays authoritative. Grids change only by pulling weights
/// back from it, or by a direct cell edit that is forwarded to it.
pub struct App<E: Engine> {
    engine: E,
    grids: [Grid; SEATS],
    snapshots: Snapshots,
}

impl<E: Engine> App<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            grids: [Grid::default(); SEATS],
            snapshots: Snapshots::default(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
    pub fn grid(&self, seat: Seat) -> &Grid {
        &self.grids[usize::from(seat)]
    }
    pub fn config(&self) -> &Config {
        &self.snapshots.working
    }
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.snapshots.working
    }
    pub fn snapshots(&self) -> &Snapshots {
        &self.snapshots
    }
    pub fn snapshots_mut(&mut self) -> &mut Snapshots {
        &mut self.snapshots
    }

    /// Validates `text`, hands its canonical form to the engine, and
    /// refreshes the grid from what the engine then holds.
    ///
    /// Nothing reaches the engine unless every segment passes the grammar.
    pub async fn set_range(&mut self, seat: Seat, text: &Value) -> Result<(), Failure> {
        Failure::check(validate(text, "range"))?;
        let canonical = text.as_str().map(canonicalize).unwrap_or_default();
        if let Some(diagnostic) = self.engine.parse(seat, &canonical).await? {
            log::warn!("engine refused {} range {:?}: {}", seat, canonical, diagnostic);
            return Err(Failure::EngineRejection(diagnostic));
        }
        log::info!("{} range set to {:?}", seat, canonical);
        self.sync(seat).await
    }
    pub async fn set_range_str(&mut self, seat: Seat, text: &str) -> Result<(), Failure> {
        self.set_range(seat, &Value::from(text)).await
    }

    /// Pulls the engine's weights for `seat` into its grid.
    pub async fn sync(&mut self, seat: Seat) -> Result<(), Failure> {
        let weights = self.engine.weights(seat).await?;
        self.grids[usize::from(seat)]
            .absorb(&weights)
            .map_err(|e| Failure::Transport(anyhow::anyhow!(e)))?;
        log::debug!("{} grid synced", seat);
        Ok(())
    }

    /// Sets one cell locally and forwards it to the engine. If the engine
    /// refuses the weight or cannot be reached, the cell keeps its old value.
    pub async fn edit(&mut self, seat: Seat, row: usize, col: usize, percent: Percent) -> Result<(), Failure> {
        let previous = self.grids[usize::from(seat)]
            .set(row, col, percent)
            .map_err(|_| Failure::Position { row, col })?;
        let outcome = match self.engine.update(seat, row, col, crate::weight(percent)).await {
            Ok(None) => Ok(()),
            Ok(Some(diagnostic)) => Err(Failure::EngineRejection(diagnostic)),
            Err(e) => Err(Failure::Transport(e)),
        };
        match outcome {
            Ok(()) => log::debug!("{} cell ({}, {}) set to {}", seat, row, col, percent),
            Err(ref e) => {
                log::warn!("{} cell ({}, {}) kept at {}: {}", seat, row, col, previous, e);
                // in bounds: the first write succeeded
                self.grids[usize::from(seat)].set(row, col, previous).ok();
            }
        }
        outcome
    }

    /// Empties the range on both sides of the bridge.
    pub async fn clear(&mut self, seat: Seat) -> Result<(), Failure> {
        self.engine.clear(seat).await?;
        self.grids[usize::from(seat)].clear();
        log::info!("{} range cleared", seat);
        Ok(())
    }

    /// the grid rendered locally
    pub fn notation(&self, seat: Seat) -> String {
        self.grid(seat).notation()
    }
    /// the engine's per-combo weights, 1326 of them
    pub async fn raw(&self, seat: Seat) -> Result<Vec<crate::Weight>, Failure> {
        Ok(self.engine.raw(seat).await?)
    }
    /// the engine's own rendering
    pub async fn engine_notation(&self, seat: Seat) -> Result<String, Failure> {
        Ok(self.engine.notation(seat).await?)
    }
}
