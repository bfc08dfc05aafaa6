//! SQLite adapter for SlotRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, Statement, TransactionTrait,
};

use crate::domain::entities::{Slot, SlotId};
use crate::domain::ports::SlotRepository;
use crate::entity::slots;
use crate::error::DomainError;

pub struct SqliteSlotRepository {
    db: DatabaseConnection,
}

impl SqliteSlotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

fn slot_from_model(model: slots::Model) -> Result<Slot, DomainError> {
    let id: SlotId = model
        .number
        .parse()
        .map_err(|_| DomainError::Database(format!("invalid slot number in store: '{}'", model.number)))?;
    let claimed = model.claimed != 0 && !model.claimant.is_empty();
    Ok(Slot {
        id,
        claimant: claimed.then_some(model.claimant),
    })
}

#[async_trait]
impl SlotRepository for SqliteSlotRepository {
    async fn ensure_initialized(&self) -> Result<(), DomainError> {
        let models = SlotId::all().map(|id| slots::ActiveModel {
            number: Set(id.to_string()),
            claimed: Set(0),
            claimant: Set(String::new()),
        });

        let result = slots::Entity::insert_many(models)
            .on_conflict(
                OnConflict::column(slots::Column::Number)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            // Every row already existed; nothing to do.
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn list(&self) -> Result<Vec<Slot>, DomainError> {
        let rows = slots::Entity::find()
            .order_by_asc(slots::Column::Number)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        rows.into_iter().map(slot_from_model).collect()
    }

    async fn find(&self, id: SlotId) -> Result<Option<Slot>, DomainError> {
        let row = slots::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        row.map(slot_from_model).transpose()
    }

    async fn claim(&self, id: SlotId, name: &str) -> Result<bool, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        // Conditional update: only a free slot can be taken.
        let claimed = txn
            .execute(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "UPDATE slots SET claimed = 1, claimant = ? WHERE number = ? AND claimed = 0",
                [name.into(), id.to_string().into()],
            ))
            .await
            .map_err(db_err)?;

        if claimed.rows_affected() == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Ok(false);
        }

        txn.execute(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "INSERT OR IGNORE INTO participants (name, paid) VALUES (?, 0)",
            [name.into()],
        ))
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(true)
    }

    async fn release(&self, id: SlotId) -> Result<Option<String>, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let row = slots::Entity::find_by_id(id.to_string())
            .one(&txn)
            .await
            .map_err(db_err)?;

        let name = match row {
            Some(row) if row.claimed != 0 && !row.claimant.is_empty() => row.claimant,
            _ => {
                txn.rollback().await.map_err(db_err)?;
                return Ok(None);
            }
        };

        txn.execute(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "UPDATE slots SET claimed = 0, claimant = '' WHERE number = ?",
            [id.to_string().into()],
        ))
        .await
        .map_err(db_err)?;

        // Delete the participant only when no claimed slot still carries the name.
        txn.execute(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "DELETE FROM participants WHERE name = ? \
             AND (SELECT COUNT(*) FROM slots WHERE claimed = 1 AND claimant = ?) = 0",
            [name.as_str().into(), name.as_str().into()],
        ))
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(Some(name))
    }

    async fn release_all_for(&self, name: &str) -> Result<u64, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let released = txn
            .execute(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "UPDATE slots SET claimed = 0, claimant = '' WHERE claimant = ? AND claimed = 1",
                [name.into()],
            ))
            .await
            .map_err(db_err)?;

        txn.execute(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "DELETE FROM participants WHERE name = ?",
            [name.into()],
        ))
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(released.rows_affected())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        txn.execute(Statement::from_string(
            DbBackend::Sqlite,
            "UPDATE slots SET claimed = 0, claimant = ''",
        ))
        .await
        .map_err(db_err)?;

        txn.execute(Statement::from_string(
            DbBackend::Sqlite,
            "DELETE FROM participants",
        ))
        .await
        .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn winner(&self, id: SlotId) -> Result<Option<String>, DomainError> {
        let row = slots::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(row.and_then(|r| (r.claimed != 0 && !r.claimant.is_empty()).then_some(r.claimant)))
    }

    async fn counts(&self) -> Result<(u64, u64), DomainError> {
        let claimed = slots::Entity::find()
            .filter(slots::Column::Claimed.eq(1))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        let free = slots::Entity::find()
            .filter(slots::Column::Claimed.eq(0))
            .count(&self.db)
            .await
            .map_err(db_err)?;

        Ok((claimed, free))
    }
}
