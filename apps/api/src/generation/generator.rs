//! Question Generation — turns a job description and/or resume into interview Q&A.
//!
//! Flow: empty check → trim → irrelevant-input check → document block +
//!       context label → prompt → single LLM call → raw text.
//!
//! Every outcome is a `String`. LLM failures are folded into the text as
//! `"An error occurred: <message>"` so the HTTP layer always answers 200.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::generation::classifier::is_irrelevant;
use crate::generation::prompts::{
    build_document_block, build_prompt, context_label, GENERATION_SYSTEM,
    IRRELEVANT_INPUT_RESPONSE, LLM_ERROR_PREFIX, MISSING_INPUT_MESSAGE,
};
use crate::llm_client::ChatModel;

/// Request body for text-only generation. Absent fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: String,
}

/// The LLM's full response, or one of the fixed replies.
pub type GenerationResult = String;

/// Holds the chat model; shared read-only across requests.
pub struct QuestionGenerator {
    llm: Arc<dyn ChatModel>,
}

impl QuestionGenerator {
    pub fn new(llm: Arc<dyn ChatModel>) -> Self {
        Self { llm }
    }

    /// Generates interview questions and answers. Never fails.
    pub async fn generate(&self, job_description: &str, resume: &str) -> GenerationResult {
        if job_description.is_empty() && resume.is_empty() {
            return MISSING_INPUT_MESSAGE.to_string();
        }

        let job_description = job_description.trim();
        let resume = resume.trim();

        if is_irrelevant(&format!("{job_description} {resume}")) {
            info!("Input classified as irrelevant; skipping LLM call");
            return IRRELEVANT_INPUT_RESPONSE.to_string();
        }

        let document_block = build_document_block(job_description, resume);
        let label = context_label(job_description, resume);
        let prompt = build_prompt(label, &document_block);

        info!(
            "Generating interview questions from {} ({} chars)",
            label,
            document_block.chars().count()
        );

        match self.llm.complete(GENERATION_SYSTEM, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Question generation failed: {e}");
                format!("{LLM_ERROR_PREFIX}{e}")
            }
        }
    }
}
