use std::env;

use crate::auth::digest_credential;

/// Process configuration, read from the environment.
#[derive(Clone)]
pub struct Config {
    /// SQLite connection string for the raffle store.
    pub database_url: String,
    /// Hex SHA-256 digest of the administrator shared secret.
    pub admin_secret_digest: String,
    /// Credentials accepted verbatim as administrators.
    pub admin_allow_list: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://rifa.db?mode=rwc".to_string()),
            admin_secret_digest: env::var("RIFA_ADMIN_SECRET_DIGEST")
                .unwrap_or_else(|_| digest_credential("dev-admin-not-for-production")),
            admin_allow_list: env::var("RIFA_ADMIN_ALLOW_LIST")
                .map(|raw| {
                    raw.split(',')
                        .map(|entry| entry.trim().to_string())
                        .filter(|entry| !entry.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
