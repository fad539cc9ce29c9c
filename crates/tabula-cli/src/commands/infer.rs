//! Infer command - print or save the CREATE TABLE statement.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use tabula::SchemaInferrer;

use crate::reader;

pub fn run(
    file: PathBuf,
    table: Option<String>,
    delimiter: Option<char>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let table_name = table.unwrap_or_else(|| reader::derive_table_name(&file));
    let batch = reader::read_batch(&file, &table_name, delimiter)?;

    if verbose {
        println!(
            "{} {} records from {}",
            "Read".cyan().bold(),
            batch.len().to_string().white().bold(),
            file.display().to_string().white()
        );
    }

    let schema = SchemaInferrer::new().infer(&batch)?;
    let statement = schema.to_string();

    match output {
        Some(path) => {
            fs::write(&path, format!("{}\n", statement))?;
            println!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
        None => println!("{}", statement),
    }

    Ok(())
}
