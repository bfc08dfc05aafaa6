//! Slot registry service
//!
//! The only part of the raffle with transition logic: claim, release,
//! administrator override, bulk release, and full reset.

use std::sync::Arc;

use crate::auth::AdminToken;
use crate::domain::entities::{Slot, SlotId};
use crate::domain::ports::SlotRepository;
use crate::error::RaffleError;

use super::require_admin;

/// Service managing the 100 fixed slots.
pub struct RegistryService<S>
where
    S: SlotRepository,
{
    slots: Arc<S>,
}

impl<S> RegistryService<S>
where
    S: SlotRepository,
{
    pub fn new(slots: Arc<S>) -> Self {
        Self { slots }
    }

    /// Ensure the slot universe exists. Idempotent; never disturbs claims.
    pub async fn initialize(&self) -> Result<(), RaffleError> {
        self.slots.ensure_initialized().await?;
        Ok(())
    }

    /// All slots ordered ascending by number.
    pub async fn list_all(&self) -> Result<Vec<Slot>, RaffleError> {
        Ok(self.slots.list().await?)
    }

    /// Claim a free slot for `claimant_name`.
    ///
    /// The name is trimmed; an empty name fails with `EmptyName`. A taken
    /// slot fails with `AlreadyClaimed` and changes nothing. On success the
    /// participant row is upserted atomically with the slot update.
    pub async fn claim(&self, id: SlotId, claimant_name: &str) -> Result<(), RaffleError> {
        let name = claimant_name.trim();
        if name.is_empty() {
            return Err(RaffleError::EmptyName);
        }

        if self.slots.claim(id, name).await? {
            tracing::info!(slot = %id, claimant = name, "slot claimed");
            Ok(())
        } else {
            Err(RaffleError::AlreadyClaimed(id))
        }
    }

    /// Release a claimed slot.
    ///
    /// Allowed when `requesting_name` exactly matches the current claimant
    /// (self-service) or when an administrator token is supplied (override).
    /// Releasing the claimant's last slot deletes their participant row.
    pub async fn release(
        &self,
        id: SlotId,
        requesting_name: &str,
        admin: Option<&AdminToken>,
    ) -> Result<(), RaffleError> {
        let slot = self.slots.find(id).await?;
        let claimant = slot
            .and_then(|s| s.claimant)
            .ok_or(RaffleError::NotClaimed(id))?;

        if admin.is_none() && requesting_name.trim() != claimant {
            return Err(RaffleError::NotOwner(id));
        }

        self.slots
            .release(id)
            .await?
            .ok_or(RaffleError::NotClaimed(id))?;
        tracing::info!(slot = %id, claimant = %claimant, "slot released");
        Ok(())
    }

    /// Administrator-only: release every slot claimed by `name`.
    /// Returns the number of slots released.
    pub async fn release_all_for(
        &self,
        name: &str,
        admin: Option<&AdminToken>,
    ) -> Result<u64, RaffleError> {
        require_admin(admin)?;

        let released = self.slots.release_all_for(name.trim()).await?;
        tracing::info!(claimant = name, released, "released all slots for participant");
        Ok(released)
    }

    /// Administrator-only: release every slot and delete every participant.
    pub async fn reset_all(&self, admin: Option<&AdminToken>) -> Result<(), RaffleError> {
        require_admin(admin)?;

        self.slots.reset().await?;
        tracing::info!("raffle reset, all slots free");
        Ok(())
    }

    /// Claimant of `id`, or `None` if the slot is free.
    pub async fn winner(&self, id: SlotId) -> Result<Option<String>, RaffleError> {
        Ok(self.slots.winner(id).await?)
    }
}
