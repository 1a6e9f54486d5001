//! Axum route handlers for the Generation API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::handlers::{multipart_error, read_document, UploadedFile};
use crate::generation::generator::{GenerationRequest, GenerationResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub questions_and_answers: GenerationResult,
}

#[derive(Debug, Serialize)]
pub struct UploadAndGenerateResponse {
    pub questions_and_answers: GenerationResult,
    pub job_description_length: usize,
    pub resume_length: usize,
}

/// Fields collected from an upload-and-generate multipart body.
#[derive(Debug, Default)]
struct UploadForm {
    job_description_text: String,
    resume_text: String,
    job_description_file: Option<UploadedFile>,
    resume_file: Option<UploadedFile>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "job_description_file" => {
                    form.job_description_file = UploadedFile::from_field(field).await?;
                }
                "resume_file" => form.resume_file = UploadedFile::from_field(field).await?,
                "job_description_text" => {
                    form.job_description_text = field.text().await.map_err(multipart_error)?;
                }
                "resume_text" => form.resume_text = field.text().await.map_err(multipart_error)?,
                _ => {}
            }
        }
        Ok(form)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Generates questions from pasted text. LLM failures still answer 200 with
/// an "An error occurred: ..." body.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Json<GenerateResponse> {
    let questions_and_answers = state
        .generator
        .generate(request.job_description.trim(), request.resume.trim())
        .await;

    Json(GenerateResponse {
        questions_and_answers,
    })
}

/// POST /upload-and-generate
///
/// Accepts text fields and/or files for the job description and resume.
/// An uploaded file replaces the matching text field.
pub async fn handle_upload_and_generate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadAndGenerateResponse>, AppError> {
    let form = UploadForm::read(multipart).await?;

    let mut job_description = form.job_description_text.trim().to_string();
    let mut resume = form.resume_text.trim().to_string();

    if let Some(file) = form.job_description_file {
        job_description = read_document("Job description file", file).await?;
    }
    if let Some(file) = form.resume_file {
        resume = read_document("Resume file", file).await?;
    }

    if job_description.is_empty() && resume.is_empty() {
        return Err(AppError::Validation(
            "Please provide at least a job description or resume (as text or file upload)."
                .to_string(),
        ));
    }

    let job_description_length = job_description.chars().count();
    let resume_length = resume.chars().count();
    info!(job_description_length, resume_length, "Generating from upload");

    let questions_and_answers = state.generator.generate(&job_description, &resume).await;

    Ok(Json(UploadAndGenerateResponse {
        questions_and_answers,
        job_description_length,
        resume_length,
    }))
}
