//! Domain entities
//!
//! Pure domain models representing core raffle concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod participant;
pub mod raffle_config;
pub mod slot;

pub use participant::{Participant, ParticipantSlots};
pub use raffle_config::{RaffleConfig, DEFAULT_DESCRIPTION, DEFAULT_UNIT_PRICE};
pub use slot::{Slot, SlotId, SLOT_COUNT};
