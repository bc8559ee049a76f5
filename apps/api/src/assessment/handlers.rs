//! Axum route handlers for the skill assessment API.

use std::collections::HashMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assessment::analysis::{analyze_skills, AnsweredQuestion, SkillAssessment};
use crate::assessment::questions::{generate_questions, SkillQuestion};
use crate::errors::AppError;
use crate::routes::non_empty;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub domain_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<SkillQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSkillsRequest {
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub domain_id: Option<String>,
    pub questions: Option<Vec<AnsweredQuestion>>,
    pub answers: Option<HashMap<String, bool>>,
    pub open_response: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai-skill-assessment/generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQuestionsRequest>, JsonRejection>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let Json(request) = payload?;

    let (Some(role_id), Some(role_name)) = (
        non_empty(request.role_id.as_deref()),
        non_empty(request.role_name.as_deref()),
    ) else {
        return Err(AppError::Validation(
            "Missing required fields: roleId, roleName".to_string(),
        ));
    };

    info!(
        "Generating skill questions for {role_name} ({role_id}, domain {:?})",
        request.domain_id
    );
    let resolved = generate_questions(
        &state.invoker,
        role_id,
        role_name,
        state.config.personalized_fallbacks,
    )
    .await?;
    info!(
        "Serving {} skill questions for {role_name} (fallback: {})",
        resolved.value.len(),
        resolved.used_fallback
    );

    Ok(Json(GenerateQuestionsResponse {
        questions: resolved.value,
    }))
}

/// POST /api/ai-skill-assessment/analyze-skills
pub async fn handle_analyze_skills(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeSkillsRequest>, JsonRejection>,
) -> Result<Json<SkillAssessment>, AppError> {
    let Json(request) = payload?;

    let (Some(role_id), Some(role_name), Some(questions), Some(answers)) = (
        non_empty(request.role_id.as_deref()),
        non_empty(request.role_name.as_deref()),
        request.questions.as_deref(),
        request.answers.as_ref(),
    ) else {
        return Err(AppError::Validation(
            "Missing required fields: roleId, roleName, questions, answers".to_string(),
        ));
    };

    info!(
        "Analyzing skills for {role_name} ({role_id}, domain {:?}): {} questions, {} answered yes",
        request.domain_id,
        questions.len(),
        answers.values().filter(|yes| **yes).count()
    );
    let resolved = analyze_skills(
        &state.invoker,
        role_name,
        questions,
        answers,
        request.open_response.as_deref(),
    )
    .await?;
    info!(
        "Skill level {} for {role_name} (fallback: {})",
        resolved.value.skill_level, resolved.used_fallback
    );

    Ok(Json(resolved.value))
}
