//! modeldb-core
//!
//! Core library for declaring object-mapped SQLite databases.
//!
//! This crate defines the configuration a runtime needs before it can open a
//! database: which model types belong to it, its name and schema version,
//! custom column serializers, and the migrations between schema versions.
//! Schema generation, SQL execution and row mapping live elsewhere; this
//! crate only describes and validates.

pub mod config;
pub mod database;
pub mod error;
pub mod manifest;
pub mod migration;
pub mod model;
pub mod registry;
pub mod serializer;

pub use config::{DatabaseConfig, DatabaseConfigBuilder};
pub use database::{DatabaseDeclaration, DatabaseDefinition, DatabaseType};
pub use error::{ConfigError, ConfigResult, SerializerError};
pub use manifest::{load_manifest, DatabaseManifest};
pub use migration::{Migration, MigrationContainer, MigrationPlan};
pub use model::{Model, ModelType};
pub use registry::DatabaseRegistry;
pub use serializer::{SerializerType, TypeSerializer};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
