//! Test fixtures
//!
//! Factory functions for building a guard, admin token, and initialized
//! store with sensible defaults.

use crate::auth::{digest_credential, AccessGuard, AdminToken};
use crate::domain::entities::SlotId;
use crate::domain::ports::SlotRepository;

use super::mocks::InMemoryRaffleStore;

pub const TEST_ADMIN_SECRET: &str = "test-secret";
pub const TEST_ALLOW_LISTED: &str = "organizer";

pub fn test_guard() -> AccessGuard {
    AccessGuard::new(
        vec![TEST_ALLOW_LISTED.to_string()],
        digest_credential(TEST_ADMIN_SECRET),
    )
}

pub fn admin_token() -> AdminToken {
    test_guard()
        .authenticate(TEST_ADMIN_SECRET)
        .expect("test secret must authenticate")
}

/// A store with all 100 slots present and free.
pub async fn fresh_store() -> InMemoryRaffleStore {
    let store = InMemoryRaffleStore::new();
    store.ensure_initialized().await.unwrap();
    store
}

pub fn slot(n: u8) -> SlotId {
    SlotId::new(n).unwrap()
}
