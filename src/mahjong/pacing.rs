use std::time::Duration;

use web_time::Instant;

use super::table::{Phase, Table, TableEvent};
use super::tile::Tile;
use crate::error::MahjongError;

/// Wall-clock driver for a [`Table`].
///
/// The host calls [`poll`](Self::poll) from its frame or timer loop; a
/// computer step only runs once its configured delay has passed since the
/// previous step. A step that has started always completes.
pub struct PacedTable {
    table: Table,
    last_step: Instant,
}

impl PacedTable {
    pub fn new(table: Table) -> Self {
        Self::starting_at(table, Instant::now())
    }

    pub fn starting_at(table: Table, now: Instant) -> Self {
        Self {
            table,
            last_step: now,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Delay owed before the next automatic step, or `None` while the table
    /// is finished or waiting on the human seat.
    pub fn pending_delay(&self) -> Option<Duration> {
        let config = self.table.config();
        let human = self.table.human_seat();
        match self.table.phase() {
            Phase::AwaitDraw { seat } if seat == human => Some(Duration::ZERO),
            Phase::AwaitDraw { .. } => Some(Duration::from_millis(config.draw_delay_ms.into())),
            Phase::AwaitDiscard { seat } if seat != human => {
                Some(Duration::from_millis(config.discard_delay_ms.into()))
            }
            _ => None,
        }
    }

    pub fn poll(&mut self) -> Result<Option<TableEvent>, MahjongError> {
        self.poll_at(Instant::now())
    }

    /// Runs at most one automatic step if it is due at `now`.
    pub fn poll_at(&mut self, now: Instant) -> Result<Option<TableEvent>, MahjongError> {
        let Some(delay) = self.pending_delay() else {
            return Ok(None);
        };
        if now.saturating_duration_since(self.last_step) < delay {
            return Ok(None);
        }
        self.advance_at(now).map(Some)
    }

    pub fn discard(&mut self, tile: Tile) -> Result<TableEvent, MahjongError> {
        self.discard_at(tile, Instant::now())
    }

    pub fn claim_pong(&mut self) -> Result<TableEvent, MahjongError> {
        self.claim_pong_at(Instant::now())
    }

    pub fn claim_kong(&mut self) -> Result<TableEvent, MahjongError> {
        self.claim_kong_at(Instant::now())
    }

    pub fn pass_claim(&mut self) -> Result<TableEvent, MahjongError> {
        self.pass_claim_at(Instant::now())
    }

    /// Unpaced step, for hosts that schedule their own timers.
    pub fn advance(&mut self) -> Result<TableEvent, MahjongError> {
        self.advance_at(Instant::now())
    }

    // The `*_at` variants stamp the step with the caller's clock, so a host
    // driving `poll_at` keeps a single time source.

    pub fn discard_at(&mut self, tile: Tile, now: Instant) -> Result<TableEvent, MahjongError> {
        self.step_at(now, |table| table.discard(tile))
    }

    pub fn claim_pong_at(&mut self, now: Instant) -> Result<TableEvent, MahjongError> {
        self.step_at(now, Table::claim_pong)
    }

    pub fn claim_kong_at(&mut self, now: Instant) -> Result<TableEvent, MahjongError> {
        self.step_at(now, Table::claim_kong)
    }

    pub fn pass_claim_at(&mut self, now: Instant) -> Result<TableEvent, MahjongError> {
        self.step_at(now, Table::pass_claim)
    }

    pub fn advance_at(&mut self, now: Instant) -> Result<TableEvent, MahjongError> {
        self.step_at(now, Table::advance)
    }

    fn step_at<F>(&mut self, now: Instant, action: F) -> Result<TableEvent, MahjongError>
    where
        F: FnOnce(&mut Table) -> Result<TableEvent, MahjongError>,
    {
        let event = action(&mut self.table)?;
        self.last_step = now;
        Ok(event)
    }
}
