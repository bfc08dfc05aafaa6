//! Administrator authentication.

pub mod guard;

pub use guard::{digest_credential, AccessGuard, AdminToken};
