//! Participant domain entity
//!
//! A participant exists iff at least one slot carries their name as claimant.
//! The ledger derives membership from the slot registry; it only owns the
//! paid flag.

use serde::{Deserialize, Serialize};

use super::slot::SlotId;

/// A named claimant with their payment status.
///
/// Names are case-sensitive and stored as typed; no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub paid: bool,
}

/// A ledger row: one participant together with every slot they hold.
///
/// Slot ids are ordered ascending. Recomputed from the slot registry on
/// every read, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSlots {
    pub name: String,
    pub slots: Vec<SlotId>,
    pub paid: bool,
}
