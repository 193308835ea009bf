use thiserror::Error;

/// Error type for building and registering database configurations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The database-definition type carries no declaration (name + version).
    ///
    /// This is a startup-time programming error; there is nothing a caller can
    /// retry.
    #[error("No database declaration found for {database}")]
    MissingDeclaration { database: &'static str },

    /// A config with no registered models was handed to the registry.
    #[error("Database config '{name}' is not valid: no models registered")]
    InvalidConfig { name: String },

    /// The same database-definition type was registered twice.
    #[error("Database {database} is already registered")]
    DuplicateDatabase { database: &'static str },

    /// No migration path exists and the config forbids rebuilding the schema.
    #[error(
        "A migration from version {from} to version {to} is required but no migration path was found"
    )]
    MigrationRequired { from: i32, to: i32 },
}

/// Convenience result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for custom column conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerializerError {
    /// The stored column holds a different SQLite storage class than expected.
    #[error("Expected a {expected} column, found {found}")]
    UnexpectedColumn { expected: &'static str, found: &'static str },

    /// The stored integer cannot be represented by the target type.
    #[error("Column value {0} is out of range")]
    OutOfRange(i64),
}
