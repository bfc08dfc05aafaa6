//! Error types for each layer:
//! - `DomainError`: storage-layer faults surfaced by repository ports
//! - `RaffleError`: application-layer failures returned by services

use thiserror::Error;

use crate::domain::entities::SlotId;

/// Storage-layer errors. These are system faults, not validation failures;
/// callers are expected to propagate them unchanged.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("database error: {0}")]
    Database(String),
}

/// Application-layer failures returned by the raffle services.
///
/// Everything except `Domain` is a local validation failure the presentation
/// layer turns into user-facing text.
#[derive(Debug, Error)]
pub enum RaffleError {
    #[error("a name is required to claim a slot")]
    EmptyName,

    #[error("slot {0} is already claimed")]
    AlreadyClaimed(SlotId),

    #[error("slot {0} is not claimed")]
    NotClaimed(SlotId),

    #[error("slot {0} is claimed by someone else")]
    NotOwner(SlotId),

    #[error("no participant named '{0}' holds any slot")]
    UnknownParticipant(String),

    #[error("invalid unit price: '{0}'")]
    InvalidValue(String),

    #[error("administrator access required")]
    AccessDenied,

    #[error("a winning number is required")]
    EmptyInput,

    #[error("winning number must be between 00 and 99, got '{0}'")]
    OutOfRange(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
