//! Participant ledger service
//!
//! The ledger is a view over the slot registry: a participant exists iff
//! they hold at least one slot. The only independent state is the paid flag.

use std::sync::Arc;

use crate::auth::AdminToken;
use crate::domain::entities::ParticipantSlots;
use crate::domain::ports::ParticipantRepository;
use crate::error::RaffleError;

use super::require_admin;

pub struct LedgerService<P>
where
    P: ParticipantRepository,
{
    participants: Arc<P>,
}

impl<P> LedgerService<P>
where
    P: ParticipantRepository,
{
    pub fn new(participants: Arc<P>) -> Self {
        Self { participants }
    }

    /// Administrator-only: set the paid flag for a participant.
    ///
    /// Fails with `UnknownParticipant` if `name` holds no slot, rather than
    /// silently doing nothing.
    pub async fn set_paid(
        &self,
        name: &str,
        paid: bool,
        admin: Option<&AdminToken>,
    ) -> Result<(), RaffleError> {
        require_admin(admin)?;

        let updated = self.participants.set_paid(name, paid).await?;
        if updated == 0 {
            return Err(RaffleError::UnknownParticipant(name.to_string()));
        }
        tracing::info!(participant = name, paid, "payment status updated");
        Ok(())
    }

    /// Participants with their slots, ordered ascending by name.
    pub async fn list_with_slots(&self) -> Result<Vec<ParticipantSlots>, RaffleError> {
        Ok(self.participants.list_with_slots().await?)
    }
}
