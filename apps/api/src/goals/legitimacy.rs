//! Screens a stated career goal before any deeper validation.
//!
//! Length checks run locally. The model judges the rest, and any model or
//! parsing failure lets the goal through.

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::invoker::{resolve, ExpectedShape, StructuredPromptInvoker};
use crate::llm_client::prompts::inline_value;

use super::prompts::LEGITIMACY_PROMPT;

pub const MIN_GOAL_CHARS: usize = 3;

const EMPTY_GOAL: &str = "Career goal cannot be empty.";
const SHORT_GOAL: &str = "Career goal is too short. Please provide a valid career or profession.";
const DEFAULT_REJECTION: &str = "This does not appear to be a valid career goal.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalCheck {
    Valid,
    Invalid { reason: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegitimacyVerdict {
    is_valid: bool,
    #[serde(default)]
    reason: Option<String>,
}

const LEGITIMACY_SHAPE: ExpectedShape = ExpectedShape {
    name: "goal legitimacy",
    required: &["isValid"],
};

/// Local checks that never need the model. Returns the rejection reason.
pub fn precheck(goal: &str) -> Option<&'static str> {
    let trimmed = goal.trim();
    if trimmed.is_empty() {
        Some(EMPTY_GOAL)
    } else if trimmed.chars().count() < MIN_GOAL_CHARS {
        Some(SHORT_GOAL)
    } else {
        None
    }
}

pub async fn check_goal_legitimacy(
    invoker: &StructuredPromptInvoker,
    goal: &str,
) -> Result<GoalCheck, AppError> {
    if let Some(reason) = precheck(goal) {
        info!("Rejected career goal before model call: {reason}");
        return Ok(GoalCheck::Invalid {
            reason: reason.to_string(),
        });
    }

    let prompt = LEGITIMACY_PROMPT.render(&[("user_goal", &inline_value(goal))])?;
    let result = invoker
        .invoke::<LegitimacyVerdict>(&prompt, &LEGITIMACY_SHAPE)
        .await
        .map(|verdict| {
            if verdict.is_valid {
                GoalCheck::Valid
            } else {
                GoalCheck::Invalid {
                    reason: verdict
                        .reason
                        .filter(|r| !r.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
                }
            }
        });

    Ok(resolve("goal legitimacy", result, |_| GoalCheck::Valid).value)
}
