//! Interaction state for the transformation form.
//!
//! `Session` holds everything the form shows between actions and gates each
//! action on the inputs it needs. A failed action stores its message in
//! `error` and leaves the rest of the state untouched.

use tracing::debug;

use crate::Supplier;
use crate::batch::transform_rows;
use crate::error::{Result, TransformError};
use crate::export::serialize;
use crate::ingest::{Row, parse_rows};
use crate::record::format_record;

/// Form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Selected supplier id; empty when nothing is selected.
    pub selected: String,
    /// Single-mode product code.
    pub text: String,
    /// Single-mode value.
    pub value: String,
    /// Result message or single record.
    pub output: String,
    /// Rows loaded from the last CSV file.
    pub rows: Vec<Row>,
    /// Records from the last transform, single or batch.
    pub records: Vec<String>,
    /// Last validation message, if any.
    pub error: Option<String>,
    /// Export content shown by the preview action.
    pub preview: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `err` as the visible message and hand it back.
    fn fail(&mut self, err: TransformError) -> TransformError {
        self.error = Some(err.to_string());
        err
    }

    /// Resolve the selected supplier or record why it cannot be.
    fn supplier(&mut self) -> Result<Supplier> {
        Supplier::lookup(&self.selected).map_err(|e| self.fail(e))
    }

    /// Transform the single text/value pair.
    pub fn transform_single(&mut self) -> Result<&str> {
        let supplier = self.supplier()?;
        if self.text.is_empty() || self.value.is_empty() {
            return Err(self.fail(TransformError::MissingInput));
        }

        let record = format_record(supplier, &self.text, &self.value);
        self.records = vec![record.clone()];
        self.output = record;
        self.error = None;
        self.preview.clear();
        Ok(&self.output)
    }

    /// Replace the loaded rows with the contents of a CSV file.
    ///
    /// Returns the number of valid rows.
    pub fn load_csv(&mut self, content: &str) -> usize {
        self.rows = parse_rows(content);
        self.text.clear();
        self.value.clear();
        self.output = format!("Caricato CSV con {} righe valide.", self.rows.len());
        debug!(rows = self.rows.len(), "csv loaded into session");
        self.rows.len()
    }

    /// Transform every loaded row.
    ///
    /// Returns the number of records produced.
    pub fn transform_batch(&mut self) -> Result<usize> {
        let supplier = self.supplier()?;
        if self.rows.is_empty() {
            return Err(self.fail(TransformError::NoRows));
        }

        self.records = transform_rows(supplier, &self.rows);
        self.output = format!(
            "Trasformati {} righe. Clicca su \"Scarica CSV Trasformato\" per scaricare i risultati.",
            self.records.len()
        );
        self.error = None;
        self.preview.clear();
        Ok(self.records.len())
    }

    /// Serialized CSV for download.
    pub fn export(&mut self) -> Result<String> {
        if self.records.is_empty() {
            return Err(self.fail(TransformError::NothingToDownload));
        }
        Ok(serialize(&self.records))
    }

    /// Store the serialized CSV in `preview`.
    pub fn show_preview(&mut self) -> Result<&str> {
        if self.records.is_empty() {
            return Err(self.fail(TransformError::NothingToPreview));
        }
        self.preview = serialize(&self.records);
        Ok(&self.preview)
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
