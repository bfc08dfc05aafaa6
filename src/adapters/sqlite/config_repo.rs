//! SQLite adapter for ConfigRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};

use crate::domain::entities::RaffleConfig;
use crate::domain::ports::ConfigRepository;
use crate::entity::configuration::{self, CONFIG_ROW_ID};
use crate::error::DomainError;

pub struct SqliteConfigRepository {
    db: DatabaseConnection,
}

impl SqliteConfigRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

#[async_trait]
impl ConfigRepository for SqliteConfigRepository {
    async fn get(&self) -> Result<RaffleConfig, DomainError> {
        let row = configuration::Entity::find_by_id(CONFIG_ROW_ID)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(row
            .map(|m| RaffleConfig {
                unit_price: u32::try_from(m.unit_price).unwrap_or(0),
                description: m.description,
            })
            .unwrap_or_default())
    }

    async fn set(&self, config: &RaffleConfig) -> Result<(), DomainError> {
        let model = configuration::ActiveModel {
            id: Set(CONFIG_ROW_ID),
            unit_price: Set(i64::from(config.unit_price)),
            description: Set(config.description.clone()),
        };

        configuration::Entity::insert(model)
            .on_conflict(
                OnConflict::column(configuration::Column::Id)
                    .update_columns([
                        configuration::Column::UnitPrice,
                        configuration::Column::Description,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}
