//! Delimited file reading with delimiter detection.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use tabula::{NamedRecord, Value};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Read a delimited file into a batch of records.
///
/// The first row is taken as the header. Every cell is classified into
/// the tagged value model; rows shorter than the header are padded with
/// empty text and longer rows are truncated, so every record keeps the
/// header's arity.
pub fn read_batch(
    path: &Path,
    type_name: &str,
    delimiter: Option<char>,
) -> Result<Vec<NamedRecord>, Box<dyn std::error::Error>> {
    let contents =
        fs::read(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;

    let delimiter = match delimiter {
        Some(d) => d as u8,
        None => detect_delimiter(&contents)?,
    };

    parse_bytes(&contents, type_name, delimiter)
}

/// Parse raw bytes into a record batch.
fn parse_bytes(
    bytes: &[u8],
    type_name: &str,
    delimiter: u8,
) -> Result<Vec<NamedRecord>, Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    if headers.is_empty() {
        return Err("no columns found".into());
    }

    let mut batch = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut cells: Vec<String> = record.iter().map(|s| s.to_string()).collect();

        while cells.len() < headers.len() {
            cells.push(String::new());
        }
        cells.truncate(headers.len());

        let values: Vec<Value> = cells.iter().map(|c| Value::classify(c)).collect();
        batch.push(NamedRecord::new(type_name, headers.clone(), values));
    }

    Ok(batch)
}

/// Derive a PascalCase table name from the file stem,
/// e.g. `numbers_1.csv` -> `Numbers1`.
pub fn derive_table_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Table".to_string());

    let mut name = String::new();
    let mut upper_next = true;
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                name.extend(ch.to_uppercase());
            } else {
                name.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }

    if name.is_empty() {
        "Table".to_string()
    } else {
        name
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8, Box<dyn std::error::Error>> {
    let lines: Vec<String> = bytes
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err("no lines to analyze".into());
    }

    // A delimiter that splits every sampled line into the same number of
    // fields wins; tabs get a slight bonus since literal tabs rarely
    // appear inside data.
    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
