//! Core services for a fixed 100-slot raffle.
//!
//! The raffle has slots "00" through "99", each claimable by exactly one
//! named participant, a derived participant ledger with payment flags, and a
//! singleton configuration (unit price, description). Mutating operations
//! that belong to the raffle organizer are gated behind [`auth::AccessGuard`].
//!
//! Uses hexagonal (ports & adapters) architecture: the presentation layer
//! calls the services in [`app`], which talk to storage through the port
//! traits in [`domain::ports`]; [`adapters::sqlite`] provides the embedded
//! SQLite implementation.
//!
//! ```no_run
//! use std::sync::Arc;
//! use rifa::adapters::sqlite::{connect, run_migrations, SqliteSlotRepository};
//! use rifa::app::RegistryService;
//! use rifa::Config;
//!
//! # async fn demo() -> Result<(), rifa::RaffleError> {
//! let config = Config::from_env();
//! let db = connect(&config.database_url).await?;
//! run_migrations(&db).await?;
//!
//! let registry = RegistryService::new(Arc::new(SqliteSlotRepository::new(db)));
//! registry.initialize().await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::{ConfigService, LedgerService, RegistryService, ReportingService};
pub use auth::{AccessGuard, AdminToken};
pub use config::Config;
pub use domain::entities::{Participant, ParticipantSlots, RaffleConfig, Slot, SlotId, SLOT_COUNT};
pub use error::{DomainError, RaffleError};
