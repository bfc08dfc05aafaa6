//! Read-only reporting facade
//!
//! Aggregations consumed by the presentation layer: sold/available counts
//! and the announce-winner lookup.

use std::sync::Arc;

use crate::domain::entities::SlotId;
use crate::domain::ports::SlotRepository;
use crate::error::RaffleError;

pub struct ReportingService<S>
where
    S: SlotRepository,
{
    slots: Arc<S>,
}

impl<S> ReportingService<S>
where
    S: SlotRepository,
{
    pub fn new(slots: Arc<S>) -> Self {
        Self { slots }
    }

    /// `(claimed, free)` counts. Always sums to 100.
    pub async fn counts(&self) -> Result<(u64, u64), RaffleError> {
        Ok(self.slots.counts().await?)
    }

    /// Announce-winner lookup from raw user input.
    ///
    /// Accepts one or two digits in "0".."99", zero-pads, and looks up the
    /// claimant. An unclaimed slot is a query miss (`Ok(None)`), not an
    /// error. Fails with `EmptyInput` or `OutOfRange` on bad input.
    pub async fn winner_announcement(&self, raw_input: &str) -> Result<Option<String>, RaffleError> {
        let raw = raw_input.trim();
        if raw.is_empty() {
            return Err(RaffleError::EmptyInput);
        }

        let id: SlotId = raw
            .parse()
            .map_err(|_| RaffleError::OutOfRange(raw.to_string()))?;

        Ok(self.slots.winner(id).await?)
    }
}
