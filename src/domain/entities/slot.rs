//! Slot domain entity
//!
//! The raffle has a fixed universe of 100 numbered slots, "00" through "99".
//! Slots are created once at initialization and never destroyed; they only
//! move between free and claimed.

use serde::{Deserialize, Serialize};

/// Number of slots in the raffle. Fixed; the slot universe is closed.
pub const SLOT_COUNT: usize = 100;

/// A validated slot number in `0..=99`.
///
/// Displays zero-padded to two digits ("07"), which is also the storage key.
/// Parsing accepts one or two digit strings, so user input like "7" maps to
/// slot "07".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(u8);

impl SlotId {
    pub fn new(value: u8) -> Option<Self> {
        ((value as usize) < SLOT_COUNT).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All slot ids in ascending order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (0..SLOT_COUNT as u8).map(SlotId)
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl std::str::FromStr for SlotId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("not a slot number: '{}'", s));
        }
        let value: u8 = s
            .parse()
            .map_err(|_| format!("not a slot number: '{}'", s))?;
        SlotId::new(value).ok_or_else(|| format!("slot number out of range: '{}'", s))
    }
}

/// One raffle slot: free, or claimed by exactly one named participant.
///
/// The claimed/claimant invariant is structural here: a slot is claimed
/// iff `claimant` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub claimant: Option<String>,
}

impl Slot {
    pub fn free(id: SlotId) -> Self {
        Self { id, claimant: None }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimant.is_some()
    }
}
