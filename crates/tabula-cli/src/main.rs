//! Tabula CLI - schema inference for delimited data files.

mod cli;
mod commands;
mod reader;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Infer {
            file,
            table,
            delimiter,
            output,
        } => commands::infer::run(file, table, delimiter, output, cli.verbose),

        Commands::Types {
            file,
            table,
            delimiter,
            json,
        } => commands::types::run(file, table, delimiter, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
