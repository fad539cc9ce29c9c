//! Record capability and the concrete dynamic record.

use crate::value::Value;

/// A structured record usable as schema-inference input.
///
/// A record exposes a type identity shared across its batch, an ordered
/// tuple of field names, and one positional value per field. Any type
/// satisfying this capability is valid input, independent of how it is
/// represented internally.
pub trait Record {
    /// The record type's identity; doubles as the table name.
    fn type_name(&self) -> &str;

    /// Field names, in declaration order.
    fn field_names(&self) -> &[String];

    /// Field values, positionally aligned with `field_names`.
    fn values(&self) -> &[Value];
}

impl<R: Record + ?Sized> Record for &R {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn field_names(&self) -> &[String] {
        (**self).field_names()
    }

    fn values(&self) -> &[Value] {
        (**self).values()
    }
}

/// A dynamically assembled record.
///
/// Construction is unchecked: an arity mismatch between names and values
/// is reported by the inferrer, not here.
#[derive(Debug, Clone)]
pub struct NamedRecord {
    type_name: String,
    field_names: Vec<String>,
    values: Vec<Value>,
}

impl NamedRecord {
    /// Create a record from its parts.
    pub fn new(
        type_name: impl Into<String>,
        field_names: Vec<String>,
        values: Vec<Value>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            field_names,
            values,
        }
    }
}

impl Record for NamedRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn field_names(&self) -> &[String] {
        &self.field_names
    }

    fn values(&self) -> &[Value] {
        &self.values
    }
}
