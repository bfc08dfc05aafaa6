//! Raffle configuration entity
//!
//! A singleton record: the price of one slot and the raffle description.
//! Created with defaults at first initialization, mutated only by an
//! administrator, never deleted.

use serde::{Deserialize, Serialize};

pub const DEFAULT_UNIT_PRICE: u32 = 100;
pub const DEFAULT_DESCRIPTION: &str = "Join this raffle and win an amazing prize!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleConfig {
    /// Price of a single slot. Non-negative by construction.
    pub unit_price: u32,
    pub description: String,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            unit_price: DEFAULT_UNIT_PRICE,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}
