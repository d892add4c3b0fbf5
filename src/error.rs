//! Error type for supplier transformations.
//!
//! Every variant except the CLI-only ones is a validation state the user can
//! fix by correcting the input and repeating the action. The `Display` text
//! is the message shown to the user.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the transformation operations.
#[derive(Debug, Error)]
pub enum TransformError {
    /// No supplier was chosen in the selector.
    #[error("Per favore, seleziona un fornitore.")]
    NoSupplierSelected,

    /// The selected supplier id is not in the registry.
    #[error("Fornitore selezionato non valido.")]
    UnknownSupplier(String),

    /// Text or value is empty in single mode.
    #[error("Per favore, inserisci sia il testo che il valore numerico.")]
    MissingInput,

    /// Batch transform requested before any valid row was loaded.
    #[error("Per favore, carica un file CSV prima di trasformare.")]
    NoRows,

    /// Download requested with no transformed records.
    #[error("Nessun dato da scaricare. Trasforma prima i dati.")]
    NothingToDownload,

    /// Preview requested with no transformed records.
    #[error("Nessun dato da visualizzare. Trasforma prima i dati.")]
    NothingToPreview,

    /// Reading or writing a file failed (CLI only).
    #[error("Errore di I/O su '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be loaded (CLI only).
    #[error("Configurazione non valida: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl TransformError {
    /// Whether this error is a user-input validation state.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Config(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            TransformError::NoSupplierSelected.to_string(),
            "Per favore, seleziona un fornitore."
        );
        assert_eq!(
            TransformError::UnknownSupplier("acme".into()).to_string(),
            "Fornitore selezionato non valido."
        );
        assert_eq!(
            TransformError::NothingToDownload.to_string(),
            "Nessun dato da scaricare. Trasforma prima i dati."
        );
    }

    #[test]
    fn test_io_is_not_validation() {
        let err = TransformError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_validation());
        assert!(err.to_string().contains("missing.csv"));
        assert!(TransformError::NoRows.is_validation());
    }
}
