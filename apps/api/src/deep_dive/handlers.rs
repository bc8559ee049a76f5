//! Axum route handler for the role deep dive.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::deep_dive::profile::{generate_role_deep_dive, RoleDeepDive};
use crate::errors::AppError;
use crate::routes::non_empty;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepDiveRequest {
    pub role: Option<String>,
    pub persona_context: Option<String>,
}

/// POST /api/ai-deep-dive
///
/// Always answers 200 once `role` is present; generation failures yield the
/// canned profile.
pub async fn handle_deep_dive(
    State(state): State<AppState>,
    payload: Result<Json<DeepDiveRequest>, JsonRejection>,
) -> Result<Json<RoleDeepDive>, AppError> {
    let Json(request) = payload?;

    let role = non_empty(request.role.as_deref())
        .ok_or_else(|| AppError::Validation("Missing role in request body".to_string()))?;
    let persona_context = request.persona_context.as_deref().unwrap_or_default();

    info!("Generating deep dive for role: {role}");
    let resolved = generate_role_deep_dive(
        &state.invoker,
        role,
        persona_context,
        state.config.personalized_fallbacks,
    )
    .await?;
    info!(
        "Deep dive for {role} ready (fallback: {})",
        resolved.used_fallback
    );

    Ok(Json(resolved.value))
}
