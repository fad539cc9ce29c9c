//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tabula: infer CREATE TABLE statements from delimited data
#[derive(Parser)]
#[command(name = "tabula")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer a schema and print the CREATE TABLE statement
    Infer {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Table name (default: derived from the file name)
        #[arg(short, long)]
        table: Option<String>,

        /// Field delimiter (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Write the statement to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the per-column type decisions
    Types {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Table name (default: derived from the file name)
        #[arg(short, long)]
        table: Option<String>,

        /// Field delimiter (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
