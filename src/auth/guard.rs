//! Administrator access guard
//!
//! A stateless predicate: a credential either matches an entry in the
//! administrator allow-list, or its SHA-256 digest matches the configured
//! shared-secret digest. Successful authentication yields an [`AdminToken`]
//! capability; the guard itself holds no session state.
//!
//! This is a simple shared-secret comparison, not a security boundary.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::config::Config;

/// Proof of a passed administrator check for the current session.
///
/// Cannot be constructed outside this crate; the only way to obtain one is
/// [`AccessGuard::authenticate`]. Administrator-only service methods take
/// `Option<&AdminToken>` instead of consulting ambient "is logged in" state.
#[derive(Debug)]
pub struct AdminToken {
    _guard: (),
}

/// Stateless administrator credential check.
pub struct AccessGuard {
    allow_list: HashSet<String>,
    secret_digest: String,
}

impl AccessGuard {
    pub fn new(allow_list: impl IntoIterator<Item = String>, secret_digest: String) -> Self {
        Self {
            allow_list: allow_list.into_iter().collect(),
            secret_digest,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.admin_allow_list.clone(),
            config.admin_secret_digest.clone(),
        )
    }

    /// Check a credential; returns a capability token on success.
    ///
    /// The caller (presentation layer) holds the token for the remainder of
    /// its session and passes it into administrator-only operations.
    pub fn authenticate(&self, credential: &str) -> Option<AdminToken> {
        let allowed = self.allow_list.contains(credential)
            || digest_credential(credential) == self.secret_digest;

        if allowed {
            tracing::info!("administrator authenticated");
            Some(AdminToken { _guard: () })
        } else {
            tracing::warn!("administrator authentication failed");
            None
        }
    }
}

/// SHA-256 digest of a credential, hex-encoded. Used both for the stored
/// shared-secret digest and for comparison at authentication time.
pub fn digest_credential(credential: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(credential.as_bytes());
    hex::encode(hasher.finalize())
}
