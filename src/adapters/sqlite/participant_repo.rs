//! SQLite adapter for ParticipantRepository

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Statement,
};

use crate::domain::entities::{ParticipantSlots, SlotId};
use crate::domain::ports::ParticipantRepository;
use crate::entity::{participants, slots};
use crate::error::DomainError;

pub struct SqliteParticipantRepository {
    db: DatabaseConnection,
}

impl SqliteParticipantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepository {
    async fn set_paid(&self, name: &str, paid: bool) -> Result<u64, DomainError> {
        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "UPDATE participants SET paid = ? WHERE name = ?",
                [i32::from(paid).into(), name.into()],
            ))
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected())
    }

    async fn list_with_slots(&self) -> Result<Vec<ParticipantSlots>, DomainError> {
        let claimed = slots::Entity::find()
            .filter(slots::Column::Claimed.eq(1))
            .order_by_asc(slots::Column::Number)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let paid_by_name: HashMap<String, bool> = participants::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|m| (m.name, m.paid != 0))
            .collect();

        // Group claimed slots by claimant; BTreeMap keeps names ascending,
        // and rows arrive ordered by number so each slot list stays sorted.
        let mut grouped: BTreeMap<String, Vec<SlotId>> = BTreeMap::new();
        for row in claimed {
            if row.claimant.is_empty() {
                continue;
            }
            let id: SlotId = row.number.parse().map_err(|_| {
                DomainError::Database(format!("invalid slot number in store: '{}'", row.number))
            })?;
            grouped.entry(row.claimant).or_default().push(id);
        }

        Ok(grouped
            .into_iter()
            .map(|(name, slots)| {
                let paid = paid_by_name.get(&name).copied().unwrap_or_else(|| {
                    tracing::warn!(participant = %name, "claimant missing from participants table");
                    false
                });
                ParticipantSlots { name, slots, paid }
            })
            .collect())
    }
}
