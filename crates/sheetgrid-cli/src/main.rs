//! sheetgrid CLI - import JSON data and inspect it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetgrid::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetgrid")]
#[command(author, version, about = "Load JSON data into a spreadsheet grid and query it")]
struct Cli {
    /// Log engine activity (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a JSON file and report what was loaded
    Import {
        /// JSON file: an array of arrays or an array of objects
        input: PathBuf,

        /// Print the populated grid as tab-separated values
        #[arg(short, long)]
        print: bool,
    },

    /// Print sum/count/average/min/max over a range
    Stats {
        /// JSON file to import
        input: PathBuf,

        /// Range in A1 notation, e.g. B2:D40
        range: String,
    },

    /// Evaluate a formula against the imported data
    Eval {
        /// JSON file to import
        input: PathBuf,

        /// Formula, e.g. "=SUM(A1:A10)"
        formula: String,
    },

    /// List cells whose value contains a term
    Search {
        /// JSON file to import
        input: PathBuf,

        /// Text to look for (case-insensitive)
        term: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Import { input, print } => import(&input, print),
        Commands::Stats { input, range } => stats(&input, &range),
        Commands::Eval { input, formula } => eval(&input, &formula),
        Commands::Search { input, term } => search(&input, &term),
    }
}

fn load(input: &Path) -> Result<(Spreadsheet, ImportSummary)> {
    let mut book = Spreadsheet::new();
    let summary = book
        .import_json_file(input)
        .with_context(|| format!("Failed to import '{}'", input.display()))?;
    Ok((book, summary))
}

fn import(input: &Path, print: bool) -> Result<()> {
    let (book, summary) = load(input)?;

    println!("File: {}", input.display());
    println!("Values written: {}", summary.values_written);
    println!("Values skipped: {}", summary.skipped);
    println!("Cells created: {}", summary.cells_created);

    let cells = book.sheet().cells();
    match cells.used_bounds() {
        Some(range) => println!(
            "Used range: {} ({} rows x {} columns)",
            range,
            range.row_count(),
            range.col_count()
        ),
        None => println!("Used range: empty"),
    }

    if print {
        if let Some(range) = cells.used_bounds() {
            println!();
            for row in range.start.row..=range.end.row {
                let line: Vec<&str> = (range.start.col..=range.end.col)
                    .map(|col| cells.value_at(row, col))
                    .collect();
                println!("{}", line.join("\t"));
            }
        }
    }

    Ok(())
}

fn stats(input: &Path, range: &str) -> Result<()> {
    let range: CellRange = range
        .parse()
        .with_context(|| format!("Invalid range '{range}'"))?;
    let (mut book, _) = load(input)?;

    let selection = book.selection_mut();
    selection.select_range(range.start.row, range.start.col, range.end.row, range.end.col);
    let stats = book
        .selection_stats()
        .context("Range selected nothing")?;

    println!("SUM: {}", stats.sum);
    println!("COUNT: {}", stats.count);
    println!("AVERAGE: {}", stats.average);
    println!("MIN: {}", stats.min);
    println!("MAX: {}", stats.max);
    Ok(())
}

fn eval(input: &Path, formula: &str) -> Result<()> {
    let (book, _) = load(input)?;
    let value = sheetgrid::evaluate_formula(formula, book.sheet().cells())
        .with_context(|| format!("Failed to evaluate '{formula}'"))?;
    println!("{value}");
    Ok(())
}

fn search(input: &Path, term: &str) -> Result<()> {
    let (mut book, _) = load(input)?;
    if book.search(term).is_none() {
        eprintln!("No matches found");
        return Ok(());
    }

    let results = book.search_results();
    for found in results.matches() {
        println!("{}\t{}", found.address, found.value);
    }
    eprintln!("{} matches", results.matches().len());
    Ok(())
}
