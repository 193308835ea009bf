use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::database::DatabaseDeclaration;
use crate::migration::{Migration, MigrationContainer};

/// File-based description of a database: declaration plus migrations.
///
/// Models and serializers are Rust types and are registered in code; a
/// manifest only carries what can be expressed as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseManifest {
    pub name: String,
    pub version: i32,
    #[serde(default)]
    pub require_migration: bool,
    #[serde(default)]
    pub migrations: Vec<Migration>,
}

impl DatabaseManifest {
    pub fn declaration(&self) -> DatabaseDeclaration {
        DatabaseDeclaration::new(self.name.clone(), self.version)
    }

    pub fn migration_container(&self) -> MigrationContainer {
        let mut container = MigrationContainer::new();
        container.add_migrations(self.migrations.iter().cloned());
        container
    }
}

/// Load a manifest from disk (JSON for `.json`, YAML otherwise).
pub fn load_manifest(path: &Path) -> Result<DatabaseManifest> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read database manifest at {}", path.display()))?;
    let manifest: DatabaseManifest = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(&body).context("Failed to parse database manifest JSON")?
    } else {
        serde_yaml::from_str(&body).context("Failed to parse database manifest YAML")?
    };
    Ok(manifest)
}
