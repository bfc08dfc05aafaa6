//! SQLite adapters
//!
//! SeaORM implementations of the repository ports, plus connection and
//! schema setup. Every compound mutation runs inside a single transaction
//! so the slots and participants tables never diverge.

pub mod config_repo;
pub mod participant_repo;
pub mod slot_repo;


pub use config_repo::SqliteConfigRepository;
pub use participant_repo::SqliteParticipantRepository;
pub use slot_repo::SqliteSlotRepository;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};

use crate::domain::entities::{DEFAULT_DESCRIPTION, DEFAULT_UNIT_PRICE};
use crate::entity::configuration::CONFIG_ROW_ID;
use crate::error::DomainError;

const CREATE_SLOTS: &str = "CREATE TABLE IF NOT EXISTS slots (
    number TEXT PRIMARY KEY,
    claimed INTEGER NOT NULL DEFAULT 0,
    claimant TEXT NOT NULL DEFAULT ''
)";

const CREATE_PARTICIPANTS: &str = "CREATE TABLE IF NOT EXISTS participants (
    name TEXT PRIMARY KEY,
    paid INTEGER NOT NULL DEFAULT 0
)";

const CREATE_CONFIGURATION: &str = "CREATE TABLE IF NOT EXISTS configuration (
    id INTEGER PRIMARY KEY,
    unit_price INTEGER NOT NULL DEFAULT 0,
    description TEXT NOT NULL DEFAULT ''
)";

/// Open the raffle database.
///
/// The pool is capped at one connection: the store has a single-writer
/// model, so compound transactions serialize, and `sqlite::memory:` stays
/// a single database instead of one per pooled connection.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DomainError> {
    let mut options = ConnectOptions::new(url.to_string());
    options.max_connections(1);

    Database::connect(options)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))
}

/// Create the three tables if absent and seed the default configuration row.
/// Idempotent; never touches existing data.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DomainError> {
    for sql in [CREATE_SLOTS, CREATE_PARTICIPANTS, CREATE_CONFIGURATION] {
        db.execute(Statement::from_string(DbBackend::Sqlite, sql))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }

    let seed = Statement::from_sql_and_values(
        DbBackend::Sqlite,
        "INSERT OR IGNORE INTO configuration (id, unit_price, description) VALUES (?, ?, ?)",
        [
            CONFIG_ROW_ID.into(),
            i64::from(DEFAULT_UNIT_PRICE).into(),
            DEFAULT_DESCRIPTION.into(),
        ],
    );
    db.execute(seed)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(())
}
