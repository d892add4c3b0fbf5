//! CSV export of transformed records.

use std::fs;
use std::path::Path;

use crate::error::{Result, TransformError};

/// Header line of every exported file.
pub const EXPORT_HEADER: &str = "Testo Trasformato";

/// File name offered for browser downloads.
pub const EXPORT_FILE_NAME: &str = "dati_trasformati.csv";

/// MIME type of the exported file.
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Join records under the export header, one per line.
pub fn serialize<S: AsRef<str>>(records: &[S]) -> String {
    let body: Vec<&str> = records.iter().map(|r| r.as_ref()).collect();
    format!("{EXPORT_HEADER}\n{}", body.join("\n"))
}

/// Write the serialized records to `path`, creating parent directories.
pub fn write_export<S: AsRef<str>>(path: &Path, records: &[S]) -> Result<()> {
    let io_err = |source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, serialize(records)).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_records() {
        let records = vec!["A/1/B;10".to_string(), "C/2/D;20".to_string()];
        assert_eq!(
            serialize(&records),
            "Testo Trasformato\nA/1/B;10\nC/2/D;20"
        );
    }

    #[test]
    fn test_write_export_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(EXPORT_FILE_NAME);
        write_export(&path, &["A/1/B;10"]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Testo Trasformato\nA/1/B;10"
        );
    }

    #[test]
    fn test_serialize_empty_keeps_header() {
        let records: Vec<String> = Vec::new();
        assert_eq!(serialize(&records), "Testo Trasformato\n");
    }
}
