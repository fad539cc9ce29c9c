//! The inferred table schema and its rendering.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::unify::SqlType;

/// An inferred table schema: a table name plus an ordered mapping from
/// column name to column type.
///
/// Built fresh per inference call, never cached.
/// Column iteration order is field-declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name, taken from the record type identity.
    pub table: String,
    /// Column types in field-declaration order.
    pub columns: IndexMap<String, SqlType>,
}

impl TableSchema {
    /// Create an empty schema for the given table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: IndexMap::new(),
        }
    }

    /// Get a column's type by name.
    pub fn column_type(&self, name: &str) -> Option<&SqlType> {
        self.columns.get(name)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl fmt::Display for TableSchema {
    /// Renders the declarative statement:
    ///
    /// ```text
    /// CREATE TABLE <TableName> (
    ///     <col1> <TYPE1>,
    ///     ...
    ///     <colN> <TYPEN>
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CREATE TABLE {} (", self.table)?;

        let last = self.columns.len().saturating_sub(1);
        for (i, (name, sql_type)) in self.columns.iter().enumerate() {
            let comma = if i == last { "" } else { "," };
            writeln!(f, "    {} {}{}", name, sql_type, comma)?;
        }

        write!(f, ");")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_multiple_columns() {
        let mut schema = TableSchema::new("Sample");
        schema.columns.insert("id".to_string(), SqlType::SmallInt);
        schema
            .columns
            .insert("score".to_string(), SqlType::DoublePrecision);
        schema.columns.insert("label".to_string(), SqlType::Text);

        assert_eq!(
            schema.to_string(),
            "CREATE TABLE Sample (\n\
             \x20   id SMALLINT,\n\
             \x20   score DOUBLE PRECISION,\n\
             \x20   label TEXT\n\
             );"
        );
    }

    #[test]
    fn test_render_single_column_has_no_trailing_comma() {
        let mut schema = TableSchema::new("One");
        schema.columns.insert("only".to_string(), SqlType::BigInt);

        assert_eq!(schema.to_string(), "CREATE TABLE One (\n    only BIGINT\n);");
    }

    #[test]
    fn test_column_lookup() {
        let mut schema = TableSchema::new("Sample");
        schema.columns.insert("id".to_string(), SqlType::Integer);

        assert_eq!(schema.column_type("id"), Some(&SqlType::Integer));
        assert_eq!(schema.column_type("missing"), None);
        assert_eq!(schema.column_count(), 1);
    }
}
