//! Axum route handler for credential sign-in.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{AuthError, SignedInUser};
use crate::errors::AppError;
use crate::routes::non_empty;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub user: SignedInUser,
    pub access_token: String,
}

/// POST /api/auth/sign-in
pub async fn handle_sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<SignInResponse>, AppError> {
    let Json(request) = payload?;

    let (Some(email), Some(password)) = (
        non_empty(request.email.as_deref()),
        non_empty(request.password.as_deref()),
    ) else {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    let Some(auth) = state.auth.as_ref() else {
        return Err(AppError::ServiceUnavailable(
            "Authentication is not configured".to_string(),
        ));
    };

    match auth.sign_in(email, password).await {
        Ok(session) => {
            info!("User {} signed in", session.user.id);
            Ok(Json(SignInResponse {
                user: session.user,
                access_token: session.access_token,
            }))
        }
        Err(AuthError::InvalidCredentials) => Err(AppError::Unauthorized),
        Err(e) => {
            warn!("Sign-in failed: {e}");
            Err(AppError::ServiceUnavailable(
                "Authentication service unavailable".to_string(),
            ))
        }
    }
}
