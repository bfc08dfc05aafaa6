//! Test utilities: in-memory port implementations and fixtures.

pub mod fixtures;
pub mod mocks;

pub use fixtures::{admin_token, fresh_store, slot, test_guard, TEST_ADMIN_SECRET, TEST_ALLOW_LISTED};
pub use mocks::InMemoryRaffleStore;
