//! Persistable model capability.
//!
//! A type opts into the object mapper by implementing [`Model`]. The
//! configuration never holds model instances, only [`ModelType`] references
//! that the runtime later resolves to tables.

use std::any::{type_name, TypeId};

/// Marks a type as a persistable entity stored in `TABLE_NAME`.
pub trait Model: 'static {
    /// Table backing this model.
    const TABLE_NAME: &'static str;
}

/// Reference to a [`Model`] type, comparable by type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelType {
    type_id: TypeId,
    type_name: &'static str,
    table_name: &'static str,
}

impl ModelType {
    pub fn of<M: Model>() -> Self {
        Self {
            type_id: TypeId::of::<M>(),
            type_name: type_name::<M>(),
            table_name: M::TABLE_NAME,
        }
    }

    /// Fully qualified Rust type name of the model.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn table_name(&self) -> &'static str {
        self.table_name
    }

    /// Returns true if this reference points at `M`.
    pub fn is<M: Model>(&self) -> bool {
        self.type_id == TypeId::of::<M>()
    }
}
