pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{assessment, auth, deep_dive, goals};

/// Request fields that are absent or blank are treated the same.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI endpoints
        .route(
            "/api/ai-deep-dive",
            post(deep_dive::handlers::handle_deep_dive),
        )
        .route(
            "/api/ai-skill-assessment/generate-questions",
            post(assessment::handlers::handle_generate_questions),
        )
        .route(
            "/api/ai-skill-assessment/analyze-skills",
            post(assessment::handlers::handle_analyze_skills),
        )
        .route(
            "/api/validate-goal-input",
            post(goals::handlers::handle_validate_goal_input),
        )
        .route(
            "/api/validate-goal",
            post(goals::handlers::handle_validate_goal),
        )
        // Auth
        .route("/api/auth/sign-in", post(auth::handlers::handle_sign_in))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::test_support::StaticVerifier;
    use crate::config::Config;
    use crate::llm_client::test_support::{
        invoker_with, FailingModel, ScriptedModel, UnreachableModel,
    };
    use crate::llm_client::TextModel;

    fn app(model: impl TextModel + 'static) -> Router {
        build_router(AppState {
            invoker: invoker_with(model, Some("test-key")),
            auth: None,
            config: Config::for_tests(),
        })
    }

    fn app_with_auth() -> Router {
        build_router(AppState {
            invoker: invoker_with(UnreachableModel, Some("test-key")),
            auth: Some(Arc::new(StaticVerifier {
                email: "asha@example.com",
                password: "hunter22",
            })),
            config: Config::for_tests(),
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn quiz_answers() -> Value {
        json!({
            "primaryDrive": "Passion for the subject",
            "tenYearVision": "Leading a research team",
            "problemSolvingApproach": "Break it into parts",
            "preferredLearningStyle": "Hands-on practice",
            "confidenceRating": "5"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(UnreachableModel)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], health::SERVICE_NAME);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_deep_dive_upstream_failure_serves_canned_profile() {
        let (status, body) = post_json(
            app(FailingModel::new()),
            "/api/ai-deep-dive",
            json!({ "role": "UX Designer" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "Software Engineer");
        assert!(body["salaryRange"]["entry"].is_string());
    }

    #[tokio::test]
    async fn test_deep_dive_requires_role() {
        let (status, body) =
            post_json(app(UnreachableModel), "/api/ai-deep-dive", json!({ "role": "" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing role in request body");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/ai-deep-dive")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app(UnreachableModel).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_goal_is_invalid_not_missing() {
        let (status, body) = post_json(
            app(UnreachableModel),
            "/api/validate-goal-input",
            json!({ "userGoal": "   " }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid career goal");
        assert_eq!(body["message"], "Career goal cannot be empty.");
        assert!(body["suggestion"].is_string());

        let (status, body) = post_json(
            app(UnreachableModel),
            "/api/validate-goal",
            json!({ "userGoal": "   ", "answers": quiz_answers() }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid career goal");
        assert_eq!(body["message"], "Career goal cannot be empty.");
    }

    #[tokio::test]
    async fn test_zero_length_goal_is_missing() {
        let (status, body) = post_json(
            app(UnreachableModel),
            "/api/validate-goal-input",
            json!({ "userGoal": "" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: userGoal");
    }

    #[tokio::test]
    async fn test_short_goal_rejected_without_model_call() {
        let (status, body) = post_json(
            app(UnreachableModel),
            "/api/validate-goal-input",
            json!({ "userGoal": "xy" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid career goal");
        assert_eq!(
            body["message"],
            "Career goal is too short. Please provide a valid career or profession."
        );
        assert!(body["suggestion"].is_string());
    }

    #[tokio::test]
    async fn test_goal_input_missing_field() {
        let (status, body) =
            post_json(app(UnreachableModel), "/api/validate-goal-input", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: userGoal");
        assert_eq!(body["message"], "Please provide a career goal to validate.");
    }

    #[tokio::test]
    async fn test_goal_input_fails_open_on_model_error() {
        let (status, body) = post_json(
            app(FailingModel::new()),
            "/api/validate-goal-input",
            json!({ "userGoal": "Marine Biologist" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "message": "Career goal is valid" }));
    }

    #[tokio::test]
    async fn test_validate_goal_names_missing_answer() {
        let mut answers = quiz_answers();
        answers.as_object_mut().unwrap().remove("confidenceRating");

        let (status, body) = post_json(
            app(UnreachableModel),
            "/api/validate-goal",
            json!({ "userGoal": "Doctor", "answers": answers }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("confidenceRating"));
    }

    #[tokio::test]
    async fn test_validate_goal_requires_goal_and_answers() {
        let (status, body) = post_json(
            app(UnreachableModel),
            "/api/validate-goal",
            json!({ "userGoal": "Doctor" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields: userGoal and answers");
    }

    #[tokio::test]
    async fn test_validate_goal_scores_pressure() {
        // The same reply satisfies both the legitimacy and the alignment shapes.
        let model = ScriptedModel::new(
            r#"{"isValid": true, "reason": "", "validatedGoal": "Doctor", "validationStatus": "Requires Reflection",
                "validationSummary": "Mixed signals.", "actionableInsights": {"superpower": "Grit", "thingToConsider": "Why medicine?"}}"#,
        );
        let (status, body) = post_json(
            app(model.clone()),
            "/api/validate-goal",
            json!({ "userGoal": "Doctor", "answers": quiz_answers() }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(model.calls(), 2);
        assert_eq!(body["validationResponse"]["validationStatus"], "Requires Reflection");
        assert_eq!(body["pressure"]["score"], 80);
        assert_eq!(body["pressure"]["level"], "high");
    }

    #[tokio::test]
    async fn test_validate_goal_fallback_from_answers() {
        let (status, body) = post_json(
            app(FailingModel::new()),
            "/api/validate-goal",
            json!({ "userGoal": "Data Scientist", "answers": quiz_answers() }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["validationResponse"]["validatedGoal"], "Data Scientist");
        assert_eq!(body["validationResponse"]["validationStatus"], "Excellent Match");
        assert_eq!(body["pressure"]["score"], 20);
    }

    #[tokio::test]
    async fn test_generate_questions_requires_role() {
        let (status, body) = post_json(
            app(UnreachableModel),
            "/api/ai-skill-assessment/generate-questions",
            json!({ "roleId": "software-engineer" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields: roleId, roleName");
    }

    #[tokio::test]
    async fn test_generate_questions_categorizes_model_output() {
        let model = ScriptedModel::new(
            r#"Sure! {"questions": ["Have you built a project with Rust?", "Can you work with a team under pressure?"]}"#,
        );
        let (status, body) = post_json(
            app(model),
            "/api/ai-skill-assessment/generate-questions",
            json!({ "roleId": "software-engineer", "roleName": "Software Engineer" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"][0]["category"], "experience");
        assert_eq!(body["questions"][1]["category"], "soft");
    }

    #[tokio::test]
    async fn test_analyze_skills_trailing_braces_fall_back() {
        let model = ScriptedModel::new(
            r#"Here you go: {"skillLevel": 70, "analysisSummary": "Solid", "strengths": [], "learningOpportunities": []} and also {}"#,
        );
        let (status, body) = post_json(
            app(model),
            "/api/ai-skill-assessment/analyze-skills",
            json!({
                "roleId": "software-engineer",
                "roleName": "Software Engineer",
                "questions": [{ "id": "tb1", "text": "Do you know Git?" }],
                "answers": { "tb1": true }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skillLevel"], 1);
    }

    #[tokio::test]
    async fn test_analyze_skills_requires_answers() {
        let (status, body) = post_json(
            app(UnreachableModel),
            "/api/ai-skill-assessment/analyze-skills",
            json!({ "roleId": "r", "roleName": "R", "questions": [] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Missing required fields: roleId, roleName, questions, answers"
        );
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let (status, body) = post_json(
            app_with_auth(),
            "/api/auth/sign-in",
            json!({ "email": "asha@example.com", "password": "hunter22" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["name"], "asha");
        assert_eq!(body["accessToken"], "token-123");
    }

    #[tokio::test]
    async fn test_sign_in_bad_password() {
        let (status, _) = post_json(
            app_with_auth(),
            "/api/auth/sign-in",
            json!({ "email": "asha@example.com", "password": "nope" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_sign_in_validation_and_unconfigured() {
        let (status, _) = post_json(
            app_with_auth(),
            "/api/auth/sign-in",
            json!({ "email": "asha@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            app(UnreachableModel),
            "/api/auth/sign-in",
            json!({ "email": "asha@example.com", "password": "hunter22" }),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
