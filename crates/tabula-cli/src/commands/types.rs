//! Types command - show per-column type decisions.

use std::path::PathBuf;

use colored::Colorize;
use tabula::SchemaInferrer;

use crate::reader;

pub fn run(
    file: PathBuf,
    table: Option<String>,
    delimiter: Option<char>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let table_name = table.unwrap_or_else(|| reader::derive_table_name(&file));
    let batch = reader::read_batch(&file, &table_name, delimiter)?;
    let schema = SchemaInferrer::new().infer(&batch)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    println!("{}", schema.table.yellow().bold());
    for (name, sql_type) in &schema.columns {
        println!("  {:20} {}", name, sql_type.to_string().cyan());
    }

    if verbose {
        println!();
        println!(
            "{} columns from {} records",
            schema.column_count().to_string().white().bold(),
            batch.len().to_string().white().bold()
        );
    }

    Ok(())
}
