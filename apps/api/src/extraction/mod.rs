//! Document extraction: turns an uploaded byte payload into plain text.
//!
//! Supported formats are plain text, PDF and Word (`docx`, with legacy `doc`
//! routed to the same parser). The size guard always runs before any parser.

pub mod docx;
pub mod handlers;
pub mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

/// Maximum accepted upload size: 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Same limit in whole megabytes, as reported to clients.
pub const MAX_UPLOAD_MB: usize = MAX_UPLOAD_BYTES / (1024 * 1024);

/// File extensions accepted for upload, in the order they are advertised.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "pdf", "docx", "doc"];

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0}. Supported formats: txt, pdf, docx, doc")]
    UnsupportedFormat(String),

    #[error("File is too large ({size} bytes). Maximum size is 10MB.")]
    SizeLimit { size: usize },

    #[error("Invalid UTF-8 in text file: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading DOCX: {0}")]
    Docx(String),
}

impl ExtractionError {
    /// Whether the failure is the caller's fault (bad format tag, oversized payload)
    /// rather than a parser failing on the content.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractionError::UnsupportedFormat(_) | ExtractionError::SizeLimit { .. }
        )
    }
}

/// Declared format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Word,
}

impl DocumentFormat {
    /// Resolves a format from a bare extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> Result<Self, ExtractionError> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Ok(DocumentFormat::PlainText),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Word),
            other => Err(ExtractionError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Resolves a format from an upload's filename. The extension is whatever
    /// follows the last `.`; a name without a dot is taken whole.
    pub fn from_file_name(file_name: Option<&str>) -> Result<Self, ExtractionError> {
        let ext = file_name
            .and_then(|name| name.rsplit('.').next())
            .unwrap_or_default();
        Self::from_extension(ext)
    }
}

/// An uploaded document awaiting extraction.
#[derive(Debug, Clone)]
pub struct InputDocument {
    pub format: DocumentFormat,
    pub payload: Bytes,
}

impl InputDocument {
    pub fn new(format: DocumentFormat, payload: Bytes) -> Self {
        Self { format, payload }
    }

    /// Builds a document from a raw upload. The size guard runs before the
    /// format is even looked at.
    pub fn from_upload(file_name: Option<&str>, payload: Bytes) -> Result<Self, ExtractionError> {
        ensure_within_limit(payload.len())?;
        let format = DocumentFormat::from_file_name(file_name)?;
        Ok(Self::new(format, payload))
    }
}

/// Rejects payloads larger than [`MAX_UPLOAD_BYTES`].
pub fn ensure_within_limit(size: usize) -> Result<(), ExtractionError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ExtractionError::SizeLimit { size });
    }
    Ok(())
}

/// Extracts plain text from a document. Empty output is valid.
pub fn extract_text(doc: &InputDocument) -> Result<String, ExtractionError> {
    ensure_within_limit(doc.payload.len())?;

    debug!(
        "Extracting {:?} document ({} bytes)",
        doc.format,
        doc.payload.len()
    );

    match doc.format {
        DocumentFormat::PlainText => Ok(String::from_utf8(doc.payload.to_vec())?),
        DocumentFormat::Pdf => pdf::extract(&doc.payload),
        DocumentFormat::Word => docx::extract(&doc.payload),
    }
}

/// Validates an upload and extracts its text on the blocking pool.
pub async fn extract_upload(
    file_name: Option<&str>,
    payload: Bytes,
) -> Result<String, ExtractionError> {
    let doc = InputDocument::from_upload(file_name, payload)?;
    if doc.format == DocumentFormat::PlainText {
        return extract_text(&doc);
    }

    let format = doc.format;
    tokio::task::spawn_blocking(move || extract_text(&doc))
        .await
        .unwrap_or_else(|join_err| {
            // pdf-extract panics on some malformed inputs
            let message = format!("parser aborted: {join_err}");
            Err(match format {
                DocumentFormat::Pdf => ExtractionError::Pdf(message),
                _ => ExtractionError::Docx(message),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_round_trips_unchanged() {
        let text = "Senior Rust Engineer\n\n  - 5+ years experience  \n";
        let doc = InputDocument::new(DocumentFormat::PlainText, Bytes::from(text));
        assert_eq!(extract_text(&doc).unwrap(), text);
    }

    #[test]
    fn test_plain_text_keeps_multibyte_characters() {
        let text = "Développeur — Zürich 東京";
        let doc = InputDocument::new(DocumentFormat::PlainText, Bytes::from(text));
        assert_eq!(extract_text(&doc).unwrap(), text);
    }

    #[test]
    fn test_empty_plain_text_is_valid() {
        let doc = InputDocument::new(DocumentFormat::PlainText, Bytes::new());
        assert_eq!(extract_text(&doc).unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let doc = InputDocument::new(
            DocumentFormat::PlainText,
            Bytes::from_static(&[0x66, 0x6f, 0xff, 0xfe]),
        );
        let err = extract_text(&doc).unwrap_err();
        assert!(matches!(err, ExtractionError::Decode(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_extension("txt").unwrap(),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_extension("PDF").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_extension("docx").unwrap(),
            DocumentFormat::Word
        );
        assert_eq!(
            DocumentFormat::from_extension("doc").unwrap(),
            DocumentFormat::Word
        );
    }

    #[test]
    fn test_unsupported_extension_is_named_in_error() {
        for ext in ["rtf", "odt", "md", "exe", ""] {
            match DocumentFormat::from_extension(ext) {
                Err(ExtractionError::UnsupportedFormat(named)) => assert_eq!(named, ext),
                other => panic!("expected UnsupportedFormat for {ext:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_from_file_name_uses_last_extension() {
        assert_eq!(
            DocumentFormat::from_file_name(Some("cv.final.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_file_name(Some("job.description.txt")).unwrap(),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn test_file_name_without_dot_uses_whole_name() {
        match DocumentFormat::from_file_name(Some("resume")) {
            Err(ExtractionError::UnsupportedFormat(named)) => assert_eq!(named, "resume"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_name_is_unsupported() {
        match DocumentFormat::from_file_name(None) {
            Err(ExtractionError::UnsupportedFormat(named)) => assert!(named.is_empty()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_size_guard_boundary() {
        assert!(ensure_within_limit(MAX_UPLOAD_BYTES).is_ok());
        let err = ensure_within_limit(MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, ExtractionError::SizeLimit { .. }));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_oversized_payload_rejected_before_parsing() {
        // Garbage that would fail the PDF parser; the size guard must answer first.
        let payload = Bytes::from(vec![b'x'; MAX_UPLOAD_BYTES + 1]);
        let doc = InputDocument::new(DocumentFormat::Pdf, payload.clone());
        assert!(matches!(
            extract_text(&doc),
            Err(ExtractionError::SizeLimit { .. })
        ));

        // from_upload checks size before it even resolves the extension
        assert!(matches!(
            InputDocument::from_upload(Some("virus.exe"), payload),
            Err(ExtractionError::SizeLimit { .. })
        ));
    }

    #[tokio::test]
    async fn test_extract_upload_plain_text() {
        let text = extract_upload(Some("jd.txt"), Bytes::from("Hiring a Go developer"))
            .await
            .unwrap();
        assert_eq!(text, "Hiring a Go developer");
    }

    #[tokio::test]
    async fn test_extract_upload_rejects_unsupported() {
        let err = extract_upload(Some("notes.rtf"), Bytes::from("{\\rtf1}"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(ref e) if e == "rtf"));
    }

    #[tokio::test]
    async fn test_extract_upload_reports_malformed_pdf() {
        let err = extract_upload(Some("resume.pdf"), Bytes::from("not a pdf at all"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}
