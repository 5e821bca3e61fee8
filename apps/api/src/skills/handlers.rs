//! Axum route handler for résumé upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extract_blocking;
use crate::skills::matcher::extract_skills;
use crate::state::AppState;

/// Multipart field carrying the résumé document.
pub const RESUME_FIELD: &str = "resumeFile";

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub message: String,
    pub skills: Vec<String>,
}

/// POST /api/upload-resume
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        // A part without a filename is a plain form value, not a file part.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if file_name.is_empty() {
            return Err(AppError::InputMissing("No file selected".to_string()));
        }
        upload = Some((file_name, field.bytes().await?));
        break;
    }

    let Some((file_name, bytes)) = upload else {
        return Err(AppError::InputMissing(
            "No file part in the request".to_string(),
        ));
    };
    info!(file_name = %file_name, bytes = bytes.len(), "Extracting skills from upload");

    let text = extract_blocking(state.extractor.clone(), bytes).await?;
    let skills: Vec<String> = extract_skills(text.as_str(), &state.vocabulary)
        .into_iter()
        .collect();

    info!(file_name = %file_name, matched = skills.len(), "Skills extracted");

    Ok(Json(UploadResumeResponse {
        message: "Skills extracted successfully!".to_string(),
        skills,
    }))
}
