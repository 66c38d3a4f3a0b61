//! Document ingestion — turns an uploaded resume file into plain text.
//!
//! The analysis core never sees bytes; a failed extraction is terminal for the
//! request and no partial analysis is produced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document type: {0}")]
    Unsupported(String),

    #[error("Failed to extract PDF text: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("Uploaded file is not valid UTF-8 text")]
    InvalidUtf8,

    #[error("Document contains no extractable text")]
    Empty,
}

/// Extracts plain text from an uploaded resume. PDFs go through `pdf-extract`;
/// `.txt` files pass through as UTF-8. The filename extension decides the
/// format.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text_from_mem(bytes)?,
        "txt" => String::from_utf8(bytes.to_vec()).map_err(|_| ExtractionError::InvalidUtf8)?,
        other => return Err(ExtractionError::Unsupported(other.to_string())),
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }

    Ok(text)
}
