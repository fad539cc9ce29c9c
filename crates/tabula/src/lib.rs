//! Tabula: relational schema inference for homogeneous record batches.
//!
//! Tabula examines each column of a batch of uniformly-shaped records,
//! unifies the column's values under a single SQL column type, and
//! assembles the result into a `CREATE TABLE` statement.
//!
//! # Core Principles
//!
//! - **Best-effort**: every column gets a type; `TEXT` is the loose fallback
//! - **Fail fast**: malformed batches abort before any unification runs
//! - **Order-preserving**: output columns follow field declaration order
//!
//! # Example
//!
//! ```
//! use tabula::{NamedRecord, SchemaInferrer, Value};
//!
//! let fields = vec!["id".to_string(), "score".to_string()];
//! let batch = vec![
//!     NamedRecord::new("Player", fields.clone(), vec![Value::Int(1), Value::Float(9.5)]),
//!     NamedRecord::new("Player", fields, vec![Value::Int(2), Value::Float(7.25)]),
//! ];
//!
//! let schema = SchemaInferrer::new().infer(batch).unwrap();
//! assert!(schema.to_string().starts_with("CREATE TABLE Player ("));
//! ```

pub mod error;
pub mod infer;
pub mod record;
pub mod schema;
pub mod unify;
pub mod value;

pub use error::{Result, TabulaError};
pub use infer::SchemaInferrer;
pub use record::{NamedRecord, Record};
pub use schema::TableSchema;
pub use unify::{SqlType, TypeUnifier};
pub use value::{Value, ValueKind};
