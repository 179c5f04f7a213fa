//! Factory for creating database clients

use crate::client::DbClient;
use crate::error::DbError;
use crate::schema::init_schema;
use salon_config::AppConfig;
use tracing::debug;

/// Builds [`DbClient`]s from the different configuration sources.
#[derive(Debug, Clone, Default)]
pub struct DbClientFactory;

impl DbClientFactory {
    pub fn new() -> Self {
        Self
    }

    /// Connects using the `[database]` section of the application configuration.
    ///
    /// # Errors
    ///
    /// * The database section is missing
    /// * The database URL is empty or unsupported
    /// * The database connection fails
    pub async fn from_app_config(&self, config: &AppConfig) -> Result<DbClient, DbError> {
        debug!("Creating database client from application configuration");
        DbClient::new(config).await
    }

    /// Connects and makes sure the schema exists.
    pub async fn connect_and_migrate(&self, config: &AppConfig) -> Result<DbClient, DbError> {
        let client = self.from_app_config(config).await?;
        init_schema(&client).await?;
        Ok(client)
    }
}
