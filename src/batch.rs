//! Batch processing of ingested rows.

use tracing::debug;

use crate::Supplier;
use crate::error::{Result, TransformError};
use crate::ingest::Row;
use crate::record::format_record;

/// Format every row with the supplier rule, in input order.
pub fn transform_rows(supplier: Supplier, rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|row| format_record(supplier, &row.text, &row.value))
        .collect()
}

/// Resolve `rule_id` and transform all `rows`.
///
/// Fails when no supplier is selected, the id is unknown, or there are no
/// rows to process.
pub fn run_batch(rule_id: &str, rows: &[Row]) -> Result<Vec<String>> {
    let supplier = Supplier::lookup(rule_id)?;
    if rows.is_empty() {
        return Err(TransformError::NoRows);
    }
    let records = transform_rows(supplier, rows);
    debug!(supplier = supplier.id(), records = records.len(), "batch transformed");
    Ok(records)
}
