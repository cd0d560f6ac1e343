use serde::{Deserialize, Serialize};

use tagtrack_domain::{DomainError, DomainResult};

/// PostgreSQL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub max_pool_size: usize,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "tagtrack".to_string(),
            username: "tagtrack".to_string(),
            password: "tagtrack".to_string(),
            max_pool_size: 10,
        }
    }
}

impl PostgresConfig {
    /// Rejects settings that cannot possibly reach a database, so the
    /// caller can report a configuration problem instead of a store error
    pub fn validate(&self) -> DomainResult<()> {
        if self.host.is_empty()
            || self.database.is_empty()
            || self.username.is_empty()
            || self.password.is_empty()
        {
            return Err(DomainError::ConfigurationError(
                "Postgres host or credentials are missing".to_string(),
            ));
        }

        Ok(())
    }
}
