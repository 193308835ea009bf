//! Custom column conversions.
//!
//! A [`TypeSerializer`] maps a value type the database cannot store natively
//! to one of SQLite's storage classes and back. Configs register serializers
//! by [`SerializerType`]; the runtime instantiates and applies them.

use std::any::{type_name, TypeId};

use rusqlite::types::Value;

use crate::error::SerializerError;

pub mod builtin;

pub use builtin::{DateTimeSerializer, PathSerializer};

/// Converts `Deserialized` values to and from a stored column value.
pub trait TypeSerializer: 'static {
    /// The in-memory type this serializer handles.
    type Deserialized;

    fn serialize(&self, value: &Self::Deserialized) -> Value;

    fn deserialize(&self, value: &Value) -> Result<Self::Deserialized, SerializerError>;
}

/// Reference to a [`TypeSerializer`] type, comparable by type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerializerType {
    type_id: TypeId,
    type_name: &'static str,
    deserialized_type_name: &'static str,
}

impl SerializerType {
    pub fn of<S: TypeSerializer>() -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            type_name: type_name::<S>(),
            deserialized_type_name: type_name::<S::Deserialized>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name of the value type the serializer converts.
    pub fn deserialized_type_name(&self) -> &'static str {
        self.deserialized_type_name
    }

    pub fn is<S: TypeSerializer>(&self) -> bool {
        self.type_id == TypeId::of::<S>()
    }
}

/// SQLite storage class name of a column value.
pub fn storage_class(value: &Value) -> &'static str {
    match value {
        Value::Null => "NULL",
        Value::Integer(_) => "INTEGER",
        Value::Real(_) => "REAL",
        Value::Text(_) => "TEXT",
        Value::Blob(_) => "BLOB",
    }
}
