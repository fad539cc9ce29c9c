//! Batch validation and schema assembly.

use crate::error::{Result, TabulaError};
use crate::record::Record;
use crate::schema::TableSchema;
use crate::unify::TypeUnifier;
use crate::value::Value;

/// Validates a record batch and assembles the inferred schema.
///
/// The whole inference is one validation pass followed by one
/// unification pass per column; no state survives the call, so separate
/// callers may run concurrently without coordination.
pub struct SchemaInferrer {
    unifier: TypeUnifier,
}

impl SchemaInferrer {
    /// Create a new inferrer.
    pub fn new() -> Self {
        Self {
            unifier: TypeUnifier::new(),
        }
    }

    /// Infer a table schema from a batch of records.
    ///
    /// The batch is validated before any unification: at least two
    /// records, every record a well-formed fixed-arity field-tuple, and
    /// exactly one record type identity across the batch. The first
    /// column whose values no rule covers aborts the whole inference;
    /// column failures are never batched together.
    pub fn infer<I, R>(&self, batch: I) -> Result<TableSchema>
    where
        I: IntoIterator<Item = R>,
        R: Record,
    {
        // The batch may be lazy; the record count and the per-column
        // passes both need it materialized.
        let records: Vec<R> = batch.into_iter().collect();

        if records.len() < 2 {
            return Err(TabulaError::InsufficientData(records.len()));
        }

        for (index, record) in records.iter().enumerate() {
            let names = record.field_names().len();
            let values = record.values().len();
            if names != values {
                return Err(TabulaError::NotUniformShape {
                    index,
                    reason: format!("{} field names but {} values", names, values),
                });
            }
        }

        let mut distinct_types: Vec<String> = Vec::new();
        for record in &records {
            let name = record.type_name();
            if !distinct_types.iter().any(|t| t == name) {
                distinct_types.push(name.to_string());
            }
        }
        if distinct_types.len() != 1 {
            return Err(TabulaError::MixedRecordTypes(distinct_types));
        }

        let field_names: Vec<String> = records[0].field_names().to_vec();
        for (index, record) in records.iter().enumerate() {
            if record.field_names() != field_names.as_slice() {
                return Err(TabulaError::NotUniformShape {
                    index,
                    reason: "field names differ from the first record".to_string(),
                });
            }
        }

        let mut schema = TableSchema::new(distinct_types.remove(0));
        for (position, column) in field_names.iter().enumerate() {
            let column_values: Vec<Value> = records
                .iter()
                .map(|record| record.values()[position].clone())
                .collect();

            let sql_type = self
                .unifier
                .unify(&column_values)
                .ok_or_else(|| TabulaError::UnunifiableColumn(column.clone()))?;

            schema.columns.insert(column.clone(), sql_type);
        }

        Ok(schema)
    }
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NamedRecord;
    use crate::unify::SqlType;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_simple_batch() {
        let batch = vec![
            NamedRecord::new(
                "Player",
                fields(&["id", "score"]),
                vec![Value::Int(1), Value::Float(9.5)],
            ),
            NamedRecord::new(
                "Player",
                fields(&["id", "score"]),
                vec![Value::Int(2), Value::Float(7.25)],
            ),
        ];

        let schema = SchemaInferrer::new().infer(batch).unwrap();
        assert_eq!(schema.table, "Player");
        assert_eq!(schema.column_type("id"), Some(&SqlType::SmallInt));
        assert_eq!(schema.column_type("score"), Some(&SqlType::DoublePrecision));
    }

    #[test]
    fn test_single_record_is_insufficient() {
        let batch = vec![NamedRecord::new(
            "Player",
            fields(&["id"]),
            vec![Value::Int(1)],
        )];

        let err = SchemaInferrer::new().infer(batch).unwrap_err();
        assert!(matches!(err, TabulaError::InsufficientData(1)));
        assert!(err.to_string().contains("at least two records"));
    }

    #[test]
    fn test_empty_batch_is_insufficient() {
        let batch: Vec<NamedRecord> = Vec::new();
        let err = SchemaInferrer::new().infer(batch).unwrap_err();
        assert!(matches!(err, TabulaError::InsufficientData(0)));
    }

    #[test]
    fn test_arity_mismatch_is_not_uniform() {
        let batch = vec![
            NamedRecord::new(
                "Player",
                fields(&["id", "score"]),
                vec![Value::Int(1), Value::Float(9.5)],
            ),
            NamedRecord::new("Player", fields(&["id", "score"]), vec![Value::Int(2)]),
        ];

        let err = SchemaInferrer::new().infer(batch).unwrap_err();
        assert!(matches!(
            err,
            TabulaError::NotUniformShape { index: 1, .. }
        ));
    }

    #[test]
    fn test_mixed_types_are_rejected() {
        let batch = vec![
            NamedRecord::new("Alpha", fields(&["id"]), vec![Value::Int(1)]),
            NamedRecord::new("Beta", fields(&["id"]), vec![Value::Int(2)]),
        ];

        let err = SchemaInferrer::new().infer(batch).unwrap_err();
        match err {
            TabulaError::MixedRecordTypes(names) => {
                assert_eq!(names, vec!["Alpha".to_string(), "Beta".to_string()]);
            }
            other => panic!("expected MixedRecordTypes, got {:?}", other),
        }
    }

    #[test]
    fn test_mixed_types_win_over_divergent_fields() {
        // Two distinct record shapes usually have distinct field tuples
        // as well; the type identity check reports first.
        let batch = vec![
            NamedRecord::new("Alpha", fields(&["id"]), vec![Value::Int(1)]),
            NamedRecord::new("Beta", fields(&["key"]), vec![Value::Int(2)]),
        ];

        let err = SchemaInferrer::new().infer(batch).unwrap_err();
        assert!(matches!(err, TabulaError::MixedRecordTypes(_)));
    }

    #[test]
    fn test_divergent_fields_same_type_is_not_uniform() {
        let batch = vec![
            NamedRecord::new("Alpha", fields(&["id"]), vec![Value::Int(1)]),
            NamedRecord::new("Alpha", fields(&["key"]), vec![Value::Int(2)]),
        ];

        let err = SchemaInferrer::new().infer(batch).unwrap_err();
        assert!(matches!(
            err,
            TabulaError::NotUniformShape { index: 1, .. }
        ));
    }

    #[test]
    fn test_accepts_borrowed_records() {
        let batch = vec![
            NamedRecord::new("Player", fields(&["id"]), vec![Value::Int(1)]),
            NamedRecord::new("Player", fields(&["id"]), vec![Value::Int(2)]),
        ];

        let schema = SchemaInferrer::new().infer(&batch).unwrap();
        assert_eq!(schema.column_count(), 1);
    }
}
