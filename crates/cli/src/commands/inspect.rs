use anyhow::{Context, Result};
use modeldb_core::{load_manifest, DatabaseManifest};
use serde::Serialize;
use tracing::debug;

use crate::{absolutize, short_checksum};

#[derive(Debug, Serialize)]
pub struct ManifestInfo {
    pub path: String,
    pub name: String,
    pub version: i32,
    pub require_migration: bool,
    pub migrations: Vec<MigrationInfo>,
}

#[derive(Debug, Serialize)]
pub struct MigrationInfo {
    pub start_version: i32,
    pub end_version: i32,
    pub statements: usize,
    pub checksum: String,
}

pub fn manifest_info(path: &str, manifest: &DatabaseManifest) -> ManifestInfo {
    ManifestInfo {
        path: path.to_string(),
        name: manifest.name.clone(),
        version: manifest.version,
        require_migration: manifest.require_migration,
        migrations: manifest
            .migrations
            .iter()
            .map(|m| MigrationInfo {
                start_version: m.start_version,
                end_version: m.end_version,
                statements: m.statements.len(),
                checksum: m.checksum(),
            })
            .collect(),
    }
}

/// Print the declaration and migrations carried by a manifest.
pub fn inspect_command(manifest: &str, json: bool) -> Result<()> {
    let path = absolutize(manifest)?;
    let loaded = load_manifest(&path)?;
    debug!(path = %path.display(), name = %loaded.name, "Loaded database manifest");
    let info = manifest_info(&path.display().to_string(), &loaded);

    if json {
        let serialized =
            serde_json::to_string_pretty(&info).context("Failed to serialize manifest info")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Database manifest");
    println!("=================");
    println!("Path: {}", info.path);
    println!("Name: {}", info.name);
    println!("Version: {}", info.version);
    println!("Require migration: {}", if info.require_migration { "yes" } else { "no" });
    println!("Migrations ({}):", info.migrations.len());
    if info.migrations.is_empty() {
        println!("  (none)");
    }
    for m in &info.migrations {
        println!(
            "  - {} -> {} ({} statements) checksum={}",
            m.start_version,
            m.end_version,
            m.statements,
            short_checksum(&m.checksum)
        );
    }

    Ok(())
}
