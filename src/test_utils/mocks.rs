//! In-memory implementation of the repository ports
//!
//! One store implements all three ports over a single lock, the same way the
//! SQLite adapters share one database: compound operations mutate slots and
//! participants under the same critical section, so the lockstep invariant
//! holds exactly as it would transactionally.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{ParticipantSlots, RaffleConfig, Slot, SlotId};
use crate::domain::ports::{ConfigRepository, ParticipantRepository, SlotRepository};
use crate::error::DomainError;

#[derive(Default)]
struct StoreState {
    slots: BTreeMap<SlotId, Option<String>>,
    participants: BTreeMap<String, bool>,
    config: Option<RaffleConfig>,
}

/// Shared in-memory raffle store. `Clone` shares the underlying state.
#[derive(Clone, Default)]
pub struct InMemoryRaffleStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryRaffleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a claim for testing. Keeps the participant table in
    /// lockstep, like a real claim would.
    pub fn with_claim(self, id: SlotId, name: &str) -> Self {
        {
            let state = &mut *self.state.write().unwrap();
            state.slots.insert(id, Some(name.to_string()));
            state.participants.entry(name.to_string()).or_insert(false);
        }
        self
    }

    /// Names currently appearing as claimant on some slot.
    pub fn claimant_set(&self) -> BTreeSet<String> {
        let state = self.state.read().unwrap();
        state.slots.values().flatten().cloned().collect()
    }

    /// Names currently present in the participant table.
    pub fn participant_set(&self) -> BTreeSet<String> {
        let state = self.state.read().unwrap();
        state.participants.keys().cloned().collect()
    }

    pub fn paid_flag(&self, name: &str) -> Option<bool> {
        let state = self.state.read().unwrap();
        state.participants.get(name).copied()
    }
}

#[async_trait]
impl SlotRepository for InMemoryRaffleStore {
    async fn ensure_initialized(&self) -> Result<(), DomainError> {
        let state = &mut *self.state.write().unwrap();
        for id in SlotId::all() {
            state.slots.entry(id).or_insert(None);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Slot>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state
            .slots
            .iter()
            .map(|(id, claimant)| Slot {
                id: *id,
                claimant: claimant.clone(),
            })
            .collect())
    }

    async fn find(&self, id: SlotId) -> Result<Option<Slot>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state.slots.get(&id).map(|claimant| Slot {
            id,
            claimant: claimant.clone(),
        }))
    }

    async fn claim(&self, id: SlotId, name: &str) -> Result<bool, DomainError> {
        let state = &mut *self.state.write().unwrap();
        let entry = state.slots.entry(id).or_insert(None);
        if entry.is_some() {
            return Ok(false);
        }
        *entry = Some(name.to_string());
        state.participants.entry(name.to_string()).or_insert(false);
        Ok(true)
    }

    async fn release(&self, id: SlotId) -> Result<Option<String>, DomainError> {
        let state = &mut *self.state.write().unwrap();
        let name = match state.slots.get_mut(&id) {
            Some(claimant) => match claimant.take() {
                Some(name) => name,
                None => return Ok(None),
            },
            None => return Ok(None),
        };

        let still_holds = state
            .slots
            .values()
            .any(|c| c.as_deref() == Some(name.as_str()));
        if !still_holds {
            state.participants.remove(&name);
        }
        Ok(Some(name))
    }

    async fn release_all_for(&self, name: &str) -> Result<u64, DomainError> {
        let state = &mut *self.state.write().unwrap();
        let mut released = 0u64;
        for claimant in state.slots.values_mut() {
            if claimant.as_deref() == Some(name) {
                *claimant = None;
                released += 1;
            }
        }
        state.participants.remove(name);
        Ok(released)
    }

    async fn reset(&self) -> Result<(), DomainError> {
        let state = &mut *self.state.write().unwrap();
        for claimant in state.slots.values_mut() {
            *claimant = None;
        }
        state.participants.clear();
        Ok(())
    }

    async fn winner(&self, id: SlotId) -> Result<Option<String>, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state.slots.get(&id).cloned().flatten())
    }

    async fn counts(&self) -> Result<(u64, u64), DomainError> {
        let state = self.state.read().unwrap();
        let claimed = state.slots.values().filter(|c| c.is_some()).count() as u64;
        let free = state.slots.len() as u64 - claimed;
        Ok((claimed, free))
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryRaffleStore {
    async fn set_paid(&self, name: &str, paid: bool) -> Result<u64, DomainError> {
        let state = &mut *self.state.write().unwrap();
        match state.participants.get_mut(name) {
            Some(flag) => {
                *flag = paid;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn list_with_slots(&self) -> Result<Vec<ParticipantSlots>, DomainError> {
        let state = self.state.read().unwrap();
        let mut grouped: BTreeMap<String, Vec<SlotId>> = BTreeMap::new();
        for (id, claimant) in &state.slots {
            if let Some(name) = claimant {
                grouped.entry(name.clone()).or_default().push(*id);
            }
        }
        Ok(grouped
            .into_iter()
            .map(|(name, slots)| {
                let paid = state.participants.get(&name).copied().unwrap_or(false);
                ParticipantSlots { name, slots, paid }
            })
            .collect())
    }
}

#[async_trait]
impl ConfigRepository for InMemoryRaffleStore {
    async fn get(&self) -> Result<RaffleConfig, DomainError> {
        let state = self.state.read().unwrap();
        Ok(state.config.clone().unwrap_or_default())
    }

    async fn set(&self, config: &RaffleConfig) -> Result<(), DomainError> {
        let state = &mut *self.state.write().unwrap();
        state.config = Some(config.clone());
        Ok(())
    }
}
