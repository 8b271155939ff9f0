//! Axum route handlers for the Match API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{combine_resume_text, ensure_pdf};
use crate::matching::matcher::{compute_match, MatchResult};
use crate::matching::report::MatchReport;
use crate::matching::taxonomy::SkillsTaxonomy;
use crate::state::AppState;

pub const MISSING_INPUT_MESSAGE: &str = "Please provide Resume (PDF/Text) and Job Description.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub result: MatchResult,
    /// one per missing skill, taxonomy order
    pub suggestions: Vec<String>,
    pub report: MatchReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
///
/// Returns the recognized skills in reporting order.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsTaxonomy> {
    Json(state.vocabulary.taxonomy.clone())
}

/// POST /api/v1/match
///
/// Matches pasted resume text against a job description.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let response = run_match(&state, &request.resume_text, &request.job_text)?;
    Ok(Json(response))
}

/// POST /api/v1/match/upload
///
/// Multipart form: `resume_file` (PDF, optional), `resume_text` (optional),
/// `job_text`. Extracted and typed resume text are joined before matching.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut extracted = String::new();
    let mut manual = String::new();
    let mut job_text = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume_file" => {
                ensure_pdf(field.file_name(), field.content_type())?;
                let bytes = field.bytes().await?;
                extracted = state.extractor.extract_text(bytes).await?;
                info!(chars = extracted.chars().count(), "Resume text extracted from upload");
            }
            "resume_text" => manual = field.text().await?,
            "job_text" => job_text = field.text().await?,
            other => {
                return Err(AppError::Validation(format!(
                    "Unexpected form field '{other}'"
                )))
            }
        }
    }

    let resume_text = combine_resume_text(&extracted, &manual);
    let response = run_match(&state, &resume_text, &job_text)?;
    Ok(Json(response))
}

/// Blank-input policy, then match → suggest → report.
fn run_match(state: &AppState, resume_text: &str, job_text: &str) -> Result<MatchResponse, AppError> {
    if resume_text.trim().is_empty() || job_text.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string()));
    }

    let result = compute_match(
        resume_text,
        job_text,
        &state.vocabulary,
        state.config.score_basis,
    );
    let suggestions = state.suggestions.suggest_enhancements(&result.missing_skills);
    let report = MatchReport::build(&result, &suggestions);

    info!(
        match_percent = result.match_percent,
        matched = result.matched_skills.len(),
        missing = result.missing_skills.len(),
        "Match computed"
    );

    Ok(MatchResponse {
        result,
        suggestions,
        report,
    })
}
