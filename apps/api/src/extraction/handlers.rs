//! Axum route handlers for document upload and format discovery.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{
    extract_upload, ExtractionError, MAX_UPLOAD_MB, SUPPORTED_EXTENSIONS,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SupportedFormatsResponse {
    pub supported_formats: Vec<&'static str>,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadDocumentResponse {
    pub filename: Option<String>,
    pub content: String,
    pub content_length: usize,
}

/// A file part pulled out of a multipart body.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub payload: Bytes,
}

impl UploadedFile {
    /// Reads a file part. Browsers send an unnamed, empty part when no file
    /// was chosen; that yields `None`.
    pub async fn from_field(field: Field<'_>) -> Result<Option<Self>, AppError> {
        let file_name = field.file_name().map(str::to_owned);
        let payload = field.bytes().await.map_err(multipart_error)?;

        if file_name.as_deref().unwrap_or_default().is_empty() && payload.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self { file_name, payload }))
    }
}

pub fn multipart_error(err: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {err}"))
}

/// Extracts an uploaded file, phrasing the size-limit rejection after `label`
/// (e.g. "Resume file is too large...").
pub async fn read_document(label: &str, upload: UploadedFile) -> Result<String, AppError> {
    match extract_upload(upload.file_name.as_deref(), upload.payload).await {
        Ok(text) => Ok(text),
        Err(ExtractionError::SizeLimit { .. }) => Err(AppError::Validation(format!(
            "{label} is too large. Maximum size is {MAX_UPLOAD_MB}MB."
        ))),
        Err(e) => Err(e.into()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /supported-formats
pub async fn handle_supported_formats() -> Json<SupportedFormatsResponse> {
    Json(SupportedFormatsResponse {
        supported_formats: SUPPORTED_EXTENSIONS.to_vec(),
        max_file_size_mb: MAX_UPLOAD_MB,
    })
}

/// POST /upload-document
///
/// Extracts the text of a single uploaded `file` part and returns it verbatim.
pub async fn handle_upload_document(
    mut multipart: Multipart,
) -> Result<Json<UploadDocumentResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("file") {
            upload = UploadedFile::from_field(field).await?;
        }
    }

    let upload = upload
        .ok_or_else(|| AppError::Validation("A file must be uploaded in the 'file' field".to_string()))?;
    let filename = upload.file_name.clone();

    let content = read_document("File", upload).await?;
    info!(
        "Extracted {} characters from {}",
        content.chars().count(),
        filename.as_deref().unwrap_or("<unnamed>")
    );

    Ok(Json(UploadDocumentResponse {
        filename,
        content_length: content.chars().count(),
        content,
    }))
}
