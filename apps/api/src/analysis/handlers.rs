//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::analysis::report::AnalysisReport;
use crate::analysis::run_analysis;
use crate::errors::AppError;
use crate::ingest::extract_text;
use crate::state::AppState;

const EXPORT_FILENAME: &str = "resume_analysis.txt";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

fn validate_inputs(resume_text: &str, job_description: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/analyze
///
/// Scores pre-extracted resume text against a job description and returns the
/// full analysis report as JSON.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    validate_inputs(&request.resume_text, &request.job_description)?;

    let report = run_analysis(
        &request.resume_text,
        &request.job_description,
        state.recommender(),
    )
    .await;

    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
///
/// Multipart variant: a `resume` file (PDF or plain text) plus a
/// `job_description` text field. Extraction failure is terminal for the
/// request; no partial analysis is produced.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        // Take the name up front; reading the field consumes it.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Validation("resume field must be a file upload".to_string())
                    })?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                resume = Some((filename, bytes));
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job_description: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {} // unknown fields are ignored
        }
    }

    let (filename, bytes) =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;

    let resume_text = extract_text(&filename, &bytes)?;
    validate_inputs(&resume_text, &job_description)?;

    let report = run_analysis(&resume_text, &job_description, state.recommender()).await;

    Ok(Json(report))
}

/// POST /api/v1/analyze/export
///
/// Same analysis as `/analyze`, serialized as a downloadable plain-text
/// report.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    validate_inputs(&request.resume_text, &request.job_description)?;

    let report = run_analysis(
        &request.resume_text,
        &request.job_description,
        state.recommender(),
    )
    .await;

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        ),
    ];

    Ok((headers, report.to_plain_text()).into_response())
}
