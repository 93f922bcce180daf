/// Export pipeline: CSV serialization, PDF report composition, and the
/// save-dialog plumbing shared by both.

pub mod csv;
pub mod pdf;

use std::path::PathBuf;

use thiserror::Error;

use crate::snapshot::SnapshotError;

/// Failures surfaced by the export pipeline. Cancelling the save dialog is
/// not a failure and never reaches this type.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("chart snapshot failed: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("csv serialization failed: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("csv buffer could not be finalized: {0}")]
    CsvFinish(String),
    #[error("exported text was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("pdf composition failed: {0}")]
    Pdf(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Ask for a destination and write `bytes` there. Returns the chosen path,
/// or `None` when the user cancelled the dialog.
pub fn save_with_dialog(
    title: &str,
    suggested_name: &str,
    filter_name: &str,
    extensions: &[&str],
    bytes: &[u8],
) -> Result<Option<PathBuf>, ExportError> {
    let Some(path) = rfd::FileDialog::new()
        .set_title(title)
        .set_file_name(suggested_name)
        .add_filter(filter_name, extensions)
        .save_file()
    else {
        return Ok(None);
    };
    std::fs::write(&path, bytes)?;
    Ok(Some(path))
}
