//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQLite).
//!
//! Compound operations (claim, release, bulk release, reset) must keep the
//! slots and participants tables in lockstep: both effects apply or neither
//! does. The adapter is responsible for grouping them in one transaction.

use async_trait::async_trait;

use crate::domain::entities::{ParticipantSlots, RaffleConfig, Slot, SlotId};
use crate::error::DomainError;

/// Repository for the fixed universe of 100 slots.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Ensure slots "00".."99" exist, each initially free. Create-if-absent:
    /// repeated calls never disturb existing claims.
    async fn ensure_initialized(&self) -> Result<(), DomainError>;

    /// All slots, ordered ascending by slot number.
    async fn list(&self) -> Result<Vec<Slot>, DomainError>;

    async fn find(&self, id: SlotId) -> Result<Option<Slot>, DomainError>;

    /// Atomically claim a free slot for `name` and ensure a participant row
    /// exists for `name` with `paid = false`. Returns `false` without any
    /// effect if the slot was not free.
    async fn claim(&self, id: SlotId, name: &str) -> Result<bool, DomainError>;

    /// Atomically clear a claimed slot, deleting the claimant's participant
    /// row if this was their last slot. Returns the former claimant, or
    /// `None` without any effect if the slot was free.
    async fn release(&self, id: SlotId) -> Result<Option<String>, DomainError>;

    /// Release every slot claimed by `name` and delete their participant
    /// row. Returns the number of slots released.
    async fn release_all_for(&self, name: &str) -> Result<u64, DomainError>;

    /// Release every slot and delete every participant row.
    async fn reset(&self) -> Result<(), DomainError>;

    /// Claimant of `id`, or `None` if the slot is free.
    async fn winner(&self, id: SlotId) -> Result<Option<String>, DomainError>;

    /// `(claimed, free)` slot counts.
    async fn counts(&self) -> Result<(u64, u64), DomainError>;
}

/// Repository for the participant ledger.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Set the paid flag for `name`. Returns the number of rows updated
    /// (0 when no such participant exists).
    async fn set_paid(&self, name: &str, paid: bool) -> Result<u64, DomainError>;

    /// Participants with their slots, ordered ascending by name; each
    /// participant's slot ids ordered ascending. Derived from the slot
    /// registry on every call.
    async fn list_with_slots(&self) -> Result<Vec<ParticipantSlots>, DomainError>;
}

/// Repository for the singleton raffle configuration.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Current configuration; defaults if never set.
    async fn get(&self) -> Result<RaffleConfig, DomainError>;

    async fn set(&self, config: &RaffleConfig) -> Result<(), DomainError>;
}
