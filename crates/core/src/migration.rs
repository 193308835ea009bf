//! Schema migrations and the container that accumulates them.
//!
//! Migrations are plain data: a version edge plus the SQL statements an
//! engine runs to cross it. The container keeps them in insertion order and
//! answers the two questions an engine asks at open time: is there a chain of
//! migrations between two versions, and what should happen if there is not.

use std::cmp::Reverse;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};

/// One schema migration step from `start_version` to `end_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Migration {
    pub start_version: i32,
    pub end_version: i32,
    /// SQL statements, executed in order by the migration engine.
    #[serde(default)]
    pub statements: Vec<String>,
}

impl Migration {
    pub fn new(start_version: i32, end_version: i32) -> Self {
        Self { start_version, end_version, statements: Vec::new() }
    }

    /// Builder-style helper to append a statement when constructing a migration.
    pub fn with_statement(mut self, sql: impl Into<String>) -> Self {
        self.statements.push(sql.into());
        self
    }

    pub fn is_downgrade(&self) -> bool {
        self.end_version < self.start_version
    }

    /// SHA-256 over the version edge and statements, as a hex string.
    ///
    /// Engines record this alongside applied migrations to notice steps that
    /// were edited after shipping.
    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("{}->{}\n", self.start_version, self.end_version));
        for statement in &self.statements {
            hasher.update(statement.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

/// What an engine should do with a database found at some on-disk version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "steps", rename_all = "snake_case")]
pub enum MigrationPlan {
    /// The stored schema already matches.
    UpToDate,
    /// Run these migrations in order.
    Migrate(Vec<Migration>),
    /// No path exists; drop and recreate the schema.
    Recreate,
}

/// Append-only, ordered collection of migrations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationContainer {
    migrations: Vec<Migration>,
}

impl MigrationContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single migration.
    ///
    /// Adding a second migration for an existing version edge keeps both; the
    /// later one is preferred when finding paths.
    pub fn add_migration(&mut self, migration: Migration) {
        let overrides = self.migrations.iter().any(|m| {
            m.start_version == migration.start_version && m.end_version == migration.end_version
        });
        if overrides {
            warn!(
                start_version = migration.start_version,
                end_version = migration.end_version,
                "Overriding migration for an existing version edge"
            );
        }
        self.migrations.push(migration);
    }

    /// Append migrations, preserving their order.
    pub fn add_migrations(&mut self, migrations: impl IntoIterator<Item = Migration>) {
        for migration in migrations {
            self.add_migration(migration);
        }
    }

    /// All migrations in insertion order.
    pub fn migrations(&self) -> &[Migration] {
        &self.migrations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Migration> {
        self.migrations.iter()
    }

    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    /// Find a chain of migrations leading from `start` to `end`.
    ///
    /// From each intermediate version the step that gets furthest without
    /// overshooting is tried first; when that branch dead-ends the next
    /// shorter step is tried. Returns an empty path when `start == end` and
    /// `None` only when no chain exists.
    pub fn find_migration_path(&self, start: i32, end: i32) -> Option<Vec<&Migration>> {
        let mut path = Vec::new();
        let mut dead_ends = HashSet::new();
        if self.extend_path(start, end, &mut path, &mut dead_ends) {
            Some(path)
        } else {
            None
        }
    }

    fn extend_path<'a>(
        &'a self,
        current: i32,
        end: i32,
        path: &mut Vec<&'a Migration>,
        dead_ends: &mut HashSet<i32>,
    ) -> bool {
        if current == end {
            return true;
        }
        if dead_ends.contains(&current) {
            return false;
        }

        for step in self.steps_from(current, end) {
            path.push(step);
            if self.extend_path(step.end_version, end, path, dead_ends) {
                return true;
            }
            path.pop();
        }

        dead_ends.insert(current);
        false
    }

    /// Steps leaving `current` towards `end` without overshooting, furthest
    /// first, one per end version (the latest added wins).
    fn steps_from(&self, current: i32, end: i32) -> Vec<&Migration> {
        let downgrade = end < current;
        let mut steps: Vec<&Migration> = Vec::new();

        for m in self.migrations.iter().filter(|m| {
            m.start_version == current
                && m.end_version != current
                && m.is_downgrade() == downgrade
                && if downgrade { m.end_version >= end } else { m.end_version <= end }
        }) {
            match steps.iter_mut().find(|s| s.end_version == m.end_version) {
                Some(existing) => *existing = m,
                None => steps.push(m),
            }
        }

        steps.sort_by_key(|m| Reverse((m.end_version - current).abs()));
        steps
    }

    /// Decide how a database stored at `from` reaches `to`.
    ///
    /// When no path exists the schema is rebuilt, unless `require_migration`
    /// is set, in which case the caller gets [`ConfigError::MigrationRequired`].
    pub fn plan(&self, from: i32, to: i32, require_migration: bool) -> ConfigResult<MigrationPlan> {
        if from == to {
            return Ok(MigrationPlan::UpToDate);
        }

        let plan = match self.find_migration_path(from, to) {
            Some(path) => MigrationPlan::Migrate(path.into_iter().cloned().collect()),
            None if require_migration => {
                return Err(ConfigError::MigrationRequired { from, to });
            }
            None => MigrationPlan::Recreate,
        };
        debug!(from, to, ?plan, "Planned schema migration");
        Ok(plan)
    }
}

impl<'a> IntoIterator for &'a MigrationContainer {
    type Item = &'a Migration;
    type IntoIter = std::slice::Iter<'a, Migration>;

    fn into_iter(self) -> Self::IntoIter {
        self.migrations.iter()
    }
}
