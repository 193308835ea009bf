//! Database configuration and its builder.
//!
//! A [`DatabaseConfig`] is an immutable snapshot of everything the runtime
//! needs to open a logical database: identity, name, schema version, model
//! and serializer types, migrations, and whether migrations are mandatory.
//! It is only produced through [`DatabaseConfigBuilder`].

use tracing::debug;

use crate::database::{DatabaseDeclaration, DatabaseDefinition, DatabaseType};
use crate::error::{ConfigError, ConfigResult};
use crate::manifest::DatabaseManifest;
use crate::migration::{Migration, MigrationContainer, MigrationPlan};
use crate::model::{Model, ModelType};
use crate::serializer::{SerializerType, TypeSerializer};

/// Configuration for one logical database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    database: DatabaseType,
    name: String,
    version: i32,
    models: Vec<ModelType>,
    serializers: Vec<SerializerType>,
    migrations: MigrationContainer,
    require_migration: bool,
}

impl DatabaseConfig {
    /// Start a builder for `D`, seeded from its declaration.
    ///
    /// Fails with [`ConfigError::MissingDeclaration`] when `D` declares nothing.
    pub fn builder<D: DatabaseDefinition>() -> ConfigResult<DatabaseConfigBuilder> {
        let declaration = D::declaration().ok_or(ConfigError::MissingDeclaration {
            database: std::any::type_name::<D>(),
        })?;
        Ok(DatabaseConfigBuilder::new(DatabaseType::of::<D>(), declaration))
    }

    /// A config is usable only once at least one model is registered.
    pub fn is_valid(&self) -> bool {
        !self.models.is_empty()
    }

    pub fn database(&self) -> DatabaseType {
        self.database
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn models(&self) -> &[ModelType] {
        &self.models
    }

    pub fn serializers(&self) -> &[SerializerType] {
        &self.serializers
    }

    pub fn migrations(&self) -> &MigrationContainer {
        &self.migrations
    }

    pub fn require_migration(&self) -> bool {
        self.require_migration
    }

    /// Plan the upgrade (or downgrade) of a database stored at `from_version`
    /// to this config's version.
    pub fn migration_plan(&self, from_version: i32) -> ConfigResult<MigrationPlan> {
        self.migrations.plan(from_version, self.version, self.require_migration)
    }
}

/// Accumulates configuration before freezing it with [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct DatabaseConfigBuilder {
    database: DatabaseType,
    name: String,
    version: i32,
    models: Vec<ModelType>,
    serializers: Vec<SerializerType>,
    migrations: MigrationContainer,
    require_migration: bool,
}

impl DatabaseConfigBuilder {
    /// Create a builder from an explicit declaration.
    pub fn new(database: DatabaseType, declaration: DatabaseDeclaration) -> Self {
        Self {
            database,
            name: declaration.name,
            version: declaration.version,
            models: Vec::new(),
            serializers: Vec::new(),
            migrations: MigrationContainer::new(),
            require_migration: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn add_model<M: Model>(mut self) -> Self {
        self.models.push(ModelType::of::<M>());
        self
    }

    pub fn add_models(mut self, models: impl IntoIterator<Item = ModelType>) -> Self {
        self.models.extend(models);
        self
    }

    pub fn add_serializer<S: TypeSerializer>(mut self) -> Self {
        self.serializers.push(SerializerType::of::<S>());
        self
    }

    pub fn add_serializers(mut self, serializers: impl IntoIterator<Item = SerializerType>) -> Self {
        self.serializers.extend(serializers);
        self
    }

    pub fn add_migrations(mut self, migrations: impl IntoIterator<Item = Migration>) -> Self {
        self.migrations.add_migrations(migrations);
        self
    }

    /// Refuse to rebuild the schema when no migration path exists.
    pub fn require_migration(mut self, require_migration: bool) -> Self {
        self.require_migration = require_migration;
        self
    }

    /// Take name, version and strictness from a manifest and append its
    /// migrations.
    pub fn apply_manifest(self, manifest: &DatabaseManifest) -> Self {
        self.name(manifest.name.clone())
            .version(manifest.version)
            .require_migration(manifest.require_migration)
            .add_migrations(manifest.migrations.iter().cloned())
    }

    /// Snapshot the current state.
    ///
    /// The returned config owns copies of every list, so further builder calls
    /// never affect configs built earlier.
    pub fn build(&self) -> DatabaseConfig {
        debug!(
            database = self.database.type_name(),
            name = %self.name,
            version = self.version,
            models = self.models.len(),
            serializers = self.serializers.len(),
            migrations = self.migrations.len(),
            "Built database config"
        );
        DatabaseConfig {
            database: self.database,
            name: self.name.clone(),
            version: self.version,
            models: self.models.clone(),
            serializers: self.serializers.clone(),
            migrations: self.migrations.clone(),
            require_migration: self.require_migration,
        }
    }
}
