use anyhow::{Context, Result};
use modeldb_core::{load_manifest, MigrationPlan};
use serde::Serialize;
use tracing::debug;

use crate::{absolutize, short_checksum};

#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub name: String,
    pub from: i32,
    pub to: i32,
    pub plan: MigrationPlan,
}

/// Compute what an engine would do with a database stored at `from`.
///
/// `to` defaults to the manifest's declared version. Fails when the manifest
/// requires migrations and no path exists.
pub fn plan_command(manifest: &str, from: i32, to: Option<i32>, json: bool) -> Result<()> {
    let path = absolutize(manifest)?;
    let loaded = load_manifest(&path)?;
    debug!(path = %path.display(), name = %loaded.name, "Loaded database manifest");
    let to = to.unwrap_or(loaded.version);

    let plan = loaded
        .migration_container()
        .plan(from, to, loaded.require_migration)
        .with_context(|| format!("Cannot migrate '{}' from {} to {}", loaded.name, from, to))?;
    let report = PlanReport { name: loaded.name, from, to, plan };

    if json {
        let serialized =
            serde_json::to_string_pretty(&report).context("Failed to serialize migration plan")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Migration plan for {} ({} -> {}):", report.name, report.from, report.to);
    match &report.plan {
        MigrationPlan::UpToDate => println!("  up to date"),
        MigrationPlan::Recreate => println!("  no migration path; schema will be recreated"),
        MigrationPlan::Migrate(steps) => {
            for (idx, step) in steps.iter().enumerate() {
                println!(
                    "  {}. {} -> {} checksum={}",
                    idx + 1,
                    step.start_version,
                    step.end_version,
                    short_checksum(&step.checksum())
                );
            }
        }
    }

    Ok(())
}
