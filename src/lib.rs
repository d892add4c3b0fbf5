//! # composizioni-rs
//!
//! Rewrites supplier product codes ("nome composizione") into a common
//! slash-separated layout and pairs each code with a value.
//!
//! ## Overview
//!
//! - **Suppliers**: a fixed table of five rewrite rules ([`Supplier`])
//! - **Records**: `transformedText;value` lines ([`format_record`])
//! - **Ingest**: lenient two-column `text;value` parsing ([`parse_rows`])
//! - **Batch**: one record per ingested row ([`run_batch`])
//! - **Export**: `Testo Trasformato` header plus records ([`serialize`])
//! - **Session**: form state driven by the web UI and the CLI ([`Session`])
//!
//! ## Example
//!
//! ```
//! use composizioni_rs::{parse_rows, run_batch, serialize};
//!
//! let rows = parse_rows("KBFFFK22222EB;10\nbroken line\nAB12CD;20\n");
//! let records = run_batch("italbox", &rows).unwrap();
//!
//! assert_eq!(records, vec!["KBFFFK/22222/EB;10", "AB/12/CD;20"]);
//! assert_eq!(
//!     serialize(&records),
//!     "Testo Trasformato\nKBFFFK/22222/EB;10\nAB/12/CD;20"
//! );
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod record;
pub mod session;
pub mod supplier;

pub use batch::{run_batch, transform_rows};
pub use config::Settings;
pub use error::{Result, TransformError};
pub use export::{EXPORT_FILE_NAME, EXPORT_HEADER, EXPORT_MIME_TYPE, serialize, write_export};
pub use ingest::{Row, parse_line, parse_rows, read_rows};
pub use logging::init_logging;
pub use record::format_record;
pub use session::Session;
pub use supplier::Supplier;
