//! CLI tool to apply supplier rules to product codes.
//!
//! Usage:
//!   trasforma list
//!   trasforma single -f italbox KBFFFK22222EB 10
//!   trasforma batch -f sifa input.csv -o dati_trasformati.csv
//!
//! Settings come from `composizioni.toml` and `COMPOSIZIONI_*` variables.

use clap::{Parser, Subcommand};
use composizioni_rs::{
    Settings, Supplier, TransformError, format_record, init_logging, read_rows, run_batch,
    serialize, write_export,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;

/// Rewrite supplier product codes and export them as CSV.
#[derive(Parser)]
#[command(name = "trasforma")]
struct Cli {
    /// Configuration file (default: composizioni.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log actions and record counts on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available suppliers
    List,

    /// Transform a single code and value
    Single {
        /// Supplier id (default: configured default_supplier)
        #[arg(short, long)]
        fornitore: Option<String>,

        /// Product code to transform
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Value appended after the separator, copied verbatim
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Transform every row of a `text;value` CSV file
    Batch {
        /// Supplier id (default: configured default_supplier)
        #[arg(short, long)]
        fornitore: Option<String>,

        /// Input CSV file
        input: PathBuf,

        /// Output file (default: configured output_file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the export to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let level = if cli.verbose { "debug" } else { settings.log_level.as_str() };
    init_logging(level);

    if let Err(e) = run(cli.command, &settings) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Supplier id from the flag, else from settings, else empty (unselected).
fn supplier_id(flag: Option<String>, settings: &Settings) -> String {
    flag.or_else(|| settings.default_supplier.clone())
        .unwrap_or_default()
}

/// Write the export to `out`, byte for byte what `write_export` puts in a file.
fn write_records<W: Write>(out: &mut W, records: &[String]) -> io::Result<()> {
    out.write_all(serialize(records).as_bytes())
}

/// Validate and format one `text;value` record.
fn single_record(
    fornitore: Option<String>,
    text: &str,
    value: &str,
    settings: &Settings,
) -> Result<String, TransformError> {
    let supplier = Supplier::lookup(&supplier_id(fornitore, settings))?;
    if text.is_empty() || value.is_empty() {
        return Err(TransformError::MissingInput);
    }
    Ok(format_record(supplier, text, value))
}

fn run(command: Command, settings: &Settings) -> Result<(), TransformError> {
    match command {
        Command::List => {
            for supplier in Supplier::ALL {
                println!("{}\t{}", supplier.id(), supplier.display_name());
            }
        }
        Command::Single {
            fornitore,
            text,
            value,
        } => {
            println!("{}", single_record(fornitore, &text, &value, settings)?);
        }
        Command::Batch {
            fornitore,
            input,
            output,
            stdout,
        } => {
            let rows = read_rows(&input)?;
            info!(input = %input.display(), rows = rows.len(), "loaded csv");
            let records = run_batch(&supplier_id(fornitore, settings), &rows)?;

            if stdout {
                write_records(&mut io::stdout(), &records).map_err(|source| {
                    TransformError::Io {
                        path: PathBuf::from("<stdout>"),
                        source,
                    }
                })?;
            } else {
                let path = output.unwrap_or_else(|| PathBuf::from(&settings.output_file));
                write_export(&path, &records)?;
                info!(output = %path.display(), records = records.len(), "wrote export");
            }
        }
    }
    Ok(())
}
