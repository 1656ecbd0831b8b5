//! gridbook CLI - inspect and edit SpreadsheetML title tables

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use gridbook::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridbook")]
#[command(
    author,
    version,
    about = "Inspect and edit SpreadsheetML workbooks by row and column title"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all sheets in a workbook
    Sheets {
        /// Input SpreadsheetML file
        input: PathBuf,
    },

    /// Print the tables of a workbook
    Show {
        /// Input SpreadsheetML file
        input: PathBuf,

        /// Only print this sheet
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Print a single value (an empty line if the cell is unset)
    Get {
        /// Input SpreadsheetML file
        input: PathBuf,
        /// Sheet name
        sheet: String,
        /// Row title
        row: String,
        /// Column title
        column: String,
    },

    /// Set a single value, creating the sheet, row and column as needed
    Set {
        /// Input SpreadsheetML file
        input: PathBuf,
        /// Sheet name
        sheet: String,
        /// Row title
        row: String,
        /// Column title
        column: String,
        /// New value
        value: String,

        /// Output file (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse and rewrite a workbook in canonical form
    #[command(alias = "fmt")]
    Normalize {
        /// Input SpreadsheetML file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Show { input, sheet } => show(&input, sheet.as_deref()),
        Commands::Get {
            input,
            sheet,
            row,
            column,
        } => get_value(&input, &sheet, &row, &column),
        Commands::Set {
            input,
            sheet,
            row,
            column,
            value,
            output,
        } => set_value(&input, sheet, row, column, value, output.as_deref()),
        Commands::Normalize { input, output } => normalize(&input, output.as_deref()),
    }
}

fn open(input: &Path) -> Result<Sheets> {
    Sheets::open(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

fn list_sheets(input: &Path) -> Result<()> {
    let sheets = open(input)?;

    for (i, name) in sheets.names().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(())
}

fn show(input: &Path, sheet: Option<&str>) -> Result<()> {
    let sheets = open(input)?;

    match sheet {
        Some(name) => {
            let table = sheets.get(name).map_err(lookup_error)?;
            println!("===========  {}  ===========", name);
            println!("{}", table);
        }
        None => print!("{}", sheets),
    }

    Ok(())
}

fn get_value(input: &Path, sheet: &str, row: &str, column: &str) -> Result<()> {
    let sheets = open(input)?;

    let value = sheets
        .get(sheet)
        .and_then(|table| table.get_value(row, column))
        .map_err(lookup_error)?;

    println!("{}", value.map(String::as_str).unwrap_or_default());
    Ok(())
}

fn set_value(
    input: &Path,
    sheet: String,
    row: String,
    column: String,
    value: String,
    output: Option<&Path>,
) -> Result<()> {
    let mut sheets = open(input)?;

    let previous = sheets.table_mut(sheet).set_value(row, column, value);
    if let Some(previous) = previous {
        eprintln!("Replaced '{}'", previous);
    }

    let target = output.unwrap_or(input);
    sheets
        .save(target)
        .with_context(|| format!("Failed to write '{}'", target.display()))?;
    eprintln!("Wrote '{}'", target.display());

    Ok(())
}

fn normalize(input: &Path, output: Option<&Path>) -> Result<()> {
    let sheets = open(input)?;

    if let Some(output_path) = output {
        sheets
            .save(output_path)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!(
            "Wrote {} sheets to '{}'",
            sheets.len(),
            output_path.display()
        );
    } else {
        io::stdout()
            .write_all(serialize(&sheets).as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Name the failed lookup kind in the error message
fn lookup_error(err: CoreError) -> anyhow::Error {
    anyhow!("{} lookup failed: {}", err.kind(), err)
}
