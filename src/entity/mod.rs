//! SeaORM entity models for the persisted tables.
//!
//! These mirror the storage layout; domain types live in `domain::entities`.

pub mod configuration;
pub mod participants;
pub mod slots;
