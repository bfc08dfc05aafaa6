//! Raffle configuration service

use std::sync::Arc;

use crate::auth::AdminToken;
use crate::domain::entities::RaffleConfig;
use crate::domain::ports::ConfigRepository;
use crate::error::RaffleError;

use super::require_admin;

pub struct ConfigService<C>
where
    C: ConfigRepository,
{
    config: Arc<C>,
}

impl<C> ConfigService<C>
where
    C: ConfigRepository,
{
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// Current configuration; defaults if never set. Always re-fetched from
    /// the store, never cached.
    pub async fn get(&self) -> Result<RaffleConfig, RaffleError> {
        Ok(self.config.get().await?)
    }

    /// Administrator-only: update the unit price and description.
    ///
    /// `raw_price` is trimmed; empty normalizes to 0; anything that does not
    /// parse as a non-negative integer fails with `InvalidValue` and leaves
    /// the stored configuration unchanged.
    pub async fn set(
        &self,
        raw_price: &str,
        description: &str,
        admin: Option<&AdminToken>,
    ) -> Result<RaffleConfig, RaffleError> {
        require_admin(admin)?;

        let trimmed = raw_price.trim();
        let unit_price = if trimmed.is_empty() {
            0
        } else {
            trimmed
                .parse::<u32>()
                .map_err(|_| RaffleError::InvalidValue(trimmed.to_string()))?
        };

        let config = RaffleConfig {
            unit_price,
            description: description.to_string(),
        };
        self.config.set(&config).await?;
        tracing::info!(unit_price, "configuration updated");
        Ok(config)
    }
}
