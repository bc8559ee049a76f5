//! Axum route handlers for goal validation.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::goals::alignment::{validate_alignment, GoalValidationVerdict, QuizAnswers};
use crate::goals::legitimacy::{check_goal_legitimacy, GoalCheck};
use crate::goals::pressure::PressureAssessment;
use crate::routes::non_empty;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalInputRequest {
    pub user_goal: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GoalInputResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswersBody {
    pub primary_drive: Option<String>,
    pub ten_year_vision: Option<String>,
    pub problem_solving_approach: Option<String>,
    pub preferred_learning_style: Option<String>,
    /// Clients send either `"4"` or `4`.
    #[serde(default, deserialize_with = "string_or_number")]
    pub confidence_rating: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

impl QuizAnswersBody {
    /// Fields are checked in quiz order; the first gap is reported.
    fn into_answers(self) -> Result<QuizAnswers, AppError> {
        fn take(value: Option<String>, field: &str) -> Result<String, AppError> {
            match non_empty(value.as_deref()) {
                Some(v) => Ok(v.to_string()),
                None => Err(AppError::Validation(format!(
                    "Missing required field in answers: {field}"
                ))),
            }
        }

        Ok(QuizAnswers {
            primary_drive: take(self.primary_drive, "primaryDrive")?,
            ten_year_vision: take(self.ten_year_vision, "tenYearVision")?,
            problem_solving_approach: take(
                self.problem_solving_approach,
                "problemSolvingApproach",
            )?,
            preferred_learning_style: take(
                self.preferred_learning_style,
                "preferredLearningStyle",
            )?,
            confidence_rating: take(self.confidence_rating, "confidenceRating")?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateGoalRequest {
    pub user_goal: Option<String>,
    pub answers: Option<QuizAnswersBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateGoalResponse {
    pub validation_response: GoalValidationVerdict,
    pub pressure: PressureAssessment,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Only an absent or zero-length goal is missing. Blank goals go on to the
/// legitimacy check, which rejects them as empty.
fn provided_goal(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// POST /api/validate-goal-input
pub async fn handle_validate_goal_input(
    State(state): State<AppState>,
    payload: Result<Json<GoalInputRequest>, JsonRejection>,
) -> Result<Json<GoalInputResponse>, AppError> {
    let Json(request) = payload?;

    let Some(user_goal) = provided_goal(request.user_goal.as_deref()) else {
        return Err(AppError::MissingField {
            error: "Missing required field: userGoal".to_string(),
            message: "Please provide a career goal to validate.".to_string(),
        });
    };

    match check_goal_legitimacy(&state.invoker, user_goal).await? {
        GoalCheck::Valid => Ok(Json(GoalInputResponse {
            success: true,
            message: "Career goal is valid",
        })),
        GoalCheck::Invalid { reason } => Err(AppError::InvalidGoal { reason }),
    }
}

/// POST /api/validate-goal
///
/// Screens the goal, then asks for an alignment verdict and derives the
/// external-pressure score from its status.
pub async fn handle_validate_goal(
    State(state): State<AppState>,
    payload: Result<Json<ValidateGoalRequest>, JsonRejection>,
) -> Result<Json<ValidateGoalResponse>, AppError> {
    let Json(request) = payload?;

    let (Some(user_goal), Some(answers)) =
        (provided_goal(request.user_goal.as_deref()), request.answers)
    else {
        return Err(AppError::Validation(
            "Missing required fields: userGoal and answers".to_string(),
        ));
    };
    let answers = answers.into_answers()?;

    if let GoalCheck::Invalid { reason } = check_goal_legitimacy(&state.invoker, user_goal).await? {
        return Err(AppError::InvalidGoal { reason });
    }

    let resolved = validate_alignment(&state.invoker, user_goal, &answers).await?;
    let pressure = PressureAssessment::from_status(resolved.value.validation_status.label());
    info!(
        "Validated goal '{user_goal}': {} (pressure {}%, fallback: {})",
        resolved.value.validation_status.label(),
        pressure.score,
        resolved.used_fallback
    );

    Ok(Json(ValidateGoalResponse {
        validation_response: resolved.value,
        pressure,
    }))
}
