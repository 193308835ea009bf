use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::DatabaseType;
use crate::error::{ConfigError, ConfigResult};

/// Set of configs accepted for opening.
///
/// Registration is the gate in front of the runtime: configs without models
/// and second configs for an already registered database are refused.
#[derive(Debug, Default)]
pub struct DatabaseRegistry {
    configs: Vec<DatabaseConfig>,
}

impl DatabaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, config: DatabaseConfig) -> ConfigResult<()> {
        if !config.is_valid() {
            return Err(ConfigError::InvalidConfig { name: config.name().to_string() });
        }
        if self.configs.iter().any(|c| c.database() == config.database()) {
            return Err(ConfigError::DuplicateDatabase { database: config.database().type_name() });
        }
        info!(
            database = config.database().type_name(),
            name = config.name(),
            version = config.version(),
            "Registered database config"
        );
        self.configs.push(config);
        Ok(())
    }

    /// Look up the config registered for database-definition type `D`.
    pub fn get<D: 'static>(&self) -> Option<&DatabaseConfig> {
        self.configs.iter().find(|c| c.database().is::<D>())
    }

    pub fn by_type(&self, database: DatabaseType) -> Option<&DatabaseConfig> {
        self.configs.iter().find(|c| c.database() == database)
    }

    /// First config registered under `name`.
    pub fn by_name(&self, name: &str) -> Option<&DatabaseConfig> {
        self.configs.iter().find(|c| c.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DatabaseConfig> {
        self.configs.iter()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
