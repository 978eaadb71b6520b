//! Analyze endpoint
//!
//! The boundary's whole job: gate too-short input, hand the text to the
//! core on a blocking task, frame the outcome as JSON.

use axum::{extract::State, Json};
use phishguard_core::AnalysisOutcome;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Minimum meaningful input length (characters, after trimming).
const MIN_INPUT_CHARS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalysisOutcome>> {
    if request.text.trim().chars().count() < MIN_INPUT_CHARS {
        return Err(AppError::ValidationError("Input text too short".to_string()));
    }

    // rusqlite is blocking; keep it off the async workers
    let agent = state.agent.clone();
    let outcome = tokio::task::spawn_blocking(move || agent.analyze(&request.text))
        .await
        .map_err(|e| AppError::InternalError(format!("analysis task failed: {e}")))??;

    Ok(Json(outcome))
}
