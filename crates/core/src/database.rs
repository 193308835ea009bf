//! Database definitions and their declarations.
//!
//! A database-definition type names a logical database. Its declaration
//! supplies the default name and schema version that a
//! [`DatabaseConfigBuilder`](crate::config::DatabaseConfigBuilder) starts from.

use std::any::{type_name, TypeId};

use serde::{Deserialize, Serialize};

/// Default name and schema version of a logical database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDeclaration {
    pub name: String,
    pub version: i32,
}

impl DatabaseDeclaration {
    pub fn new(name: impl Into<String>, version: i32) -> Self {
        Self { name: name.into(), version }
    }
}

/// A type that defines a logical database.
///
/// Returning `None` from [`declaration`](DatabaseDefinition::declaration) makes
/// the type unusable as a database: building a config for it fails with
/// [`ConfigError::MissingDeclaration`](crate::error::ConfigError::MissingDeclaration).
pub trait DatabaseDefinition: 'static {
    fn declaration() -> Option<DatabaseDeclaration>;
}

/// Opaque reference to the database-definition type owning a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseType {
    type_id: TypeId,
    type_name: &'static str,
}

impl DatabaseType {
    pub fn of<D: 'static>() -> Self {
        Self { type_id: TypeId::of::<D>(), type_name: type_name::<D>() }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<D: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<D>()
    }
}
