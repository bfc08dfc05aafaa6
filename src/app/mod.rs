//! Application layer
//!
//! Services orchestrate between domain entities, ports, and the access
//! guard. The presentation layer calls these and renders the results.

pub mod config_service;
pub mod ledger_service;
pub mod registry_service;
pub mod reporting_service;

pub use config_service::ConfigService;
pub use ledger_service::LedgerService;
pub use registry_service::RegistryService;
pub use reporting_service::ReportingService;

use crate::auth::AdminToken;
use crate::error::RaffleError;

/// Reject administrator-only calls made without a token.
pub(crate) fn require_admin(admin: Option<&AdminToken>) -> Result<(), RaffleError> {
    match admin {
        Some(_) => Ok(()),
        None => Err(RaffleError::AccessDenied),
    }
}
