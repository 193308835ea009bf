use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rusqlite::types::Value;

use crate::error::SerializerError;
use crate::serializer::{storage_class, TypeSerializer};

/// Stores UTC timestamps as INTEGER milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeSerializer;

impl TypeSerializer for DateTimeSerializer {
    type Deserialized = DateTime<Utc>;

    fn serialize(&self, value: &DateTime<Utc>) -> Value {
        Value::Integer(value.timestamp_millis())
    }

    fn deserialize(&self, value: &Value) -> Result<DateTime<Utc>, SerializerError> {
        match value {
            Value::Integer(millis) => DateTime::<Utc>::from_timestamp_millis(*millis)
                .ok_or(SerializerError::OutOfRange(*millis)),
            other => Err(SerializerError::UnexpectedColumn {
                expected: "INTEGER",
                found: storage_class(other),
            }),
        }
    }
}

/// Stores filesystem paths as TEXT.
///
/// Non UTF-8 path components are replaced lossily on the way in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSerializer;

impl TypeSerializer for PathSerializer {
    type Deserialized = PathBuf;

    fn serialize(&self, value: &PathBuf) -> Value {
        Value::Text(value.to_string_lossy().to_string())
    }

    fn deserialize(&self, value: &Value) -> Result<PathBuf, SerializerError> {
        match value {
            Value::Text(text) => Ok(PathBuf::from(text)),
            other => Err(SerializerError::UnexpectedColumn {
                expected: "TEXT",
                found: storage_class(other),
            }),
        }
    }
}
