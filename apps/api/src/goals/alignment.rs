//! Goal-alignment verdict: does the stated goal fit the student's motivations?

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::invoker::{resolve, ExpectedShape, Resolved, StructuredPromptInvoker};
use crate::llm_client::prompts::{inline_value, JSON_ONLY_INSTRUCTION};

use super::prompts::ALIGNMENT_PROMPT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    #[serde(rename = "Excellent Match")]
    ExcellentMatch,
    #[serde(rename = "Good Foundation")]
    GoodFoundation,
    #[serde(rename = "Requires Reflection")]
    RequiresReflection,
}

impl ValidationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ValidationStatus::ExcellentMatch => "Excellent Match",
            ValidationStatus::GoodFoundation => "Good Foundation",
            ValidationStatus::RequiresReflection => "Requires Reflection",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [
            ValidationStatus::ExcellentMatch,
            ValidationStatus::GoodFoundation,
            ValidationStatus::RequiresReflection,
        ]
        .into_iter()
        .find(|s| s.label() == label)
    }
}

/// The five quiz answers, all required and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswers {
    pub primary_drive: String,
    pub ten_year_vision: String,
    pub problem_solving_approach: String,
    pub preferred_learning_style: String,
    /// "1" to "5".
    pub confidence_rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionableInsights {
    pub superpower: String,
    pub thing_to_consider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalValidationVerdict {
    /// Filled from the request when the model leaves it out.
    #[serde(default)]
    pub validated_goal: String,
    pub validation_status: ValidationStatus,
    pub validation_summary: String,
    pub actionable_insights: ActionableInsights,
}

const ALIGNMENT_SHAPE: ExpectedShape = ExpectedShape {
    name: "goal alignment",
    required: &[
        "validationStatus",
        "validationSummary",
        "actionableInsights",
    ],
};

const INTRINSIC_DRIVES: &[&str] = &["Passion", "Personal", "Social"];
const EXTERNAL_DRIVES: &[&str] = &["Family", "Financial", "Peer"];

/// Status estimate from the answers alone, used when the model is unavailable.
pub fn heuristic_status(answers: &QuizAnswers) -> ValidationStatus {
    let drive = answers.primary_drive.as_str();
    let rating = answers.confidence_rating.as_str();

    if INTRINSIC_DRIVES.iter().any(|d| drive.contains(d)) {
        if matches!(rating, "4" | "5") {
            return ValidationStatus::ExcellentMatch;
        }
    } else if EXTERNAL_DRIVES.iter().any(|d| drive.contains(d)) && matches!(rating, "1" | "2") {
        return ValidationStatus::RequiresReflection;
    }
    ValidationStatus::GoodFoundation
}

pub fn fallback_verdict(user_goal: &str, answers: &QuizAnswers) -> GoalValidationVerdict {
    let status = heuristic_status(answers);
    let (summary, superpower, thing_to_consider) = match status {
        ValidationStatus::ExcellentMatch => (
            "Your passion for the subject combined with your preference for hands-on practice \
             indicates strong alignment with technical fields. Your long-term vision shows focused ambition.",
            "Your passion for the subject is a true superpower, as it will sustain you through \
             challenges and keep you motivated during difficult periods.",
            "Your confidence is strong, but remember that expertise comes from continuous learning. \
             Stay curious and keep updating your skills.",
        ),
        ValidationStatus::GoodFoundation => (
            "You have a solid foundation for pursuing this career with some clear motivations and a \
             reasonable vision. There are areas where you could develop stronger alignment.",
            "Your balanced approach to problem-solving will serve you well in navigating the \
             complexities of this field.",
            "Consider exploring how your preferred learning style aligns with the typical training \
             and skill development in this career.",
        ),
        ValidationStatus::RequiresReflection => (
            "There appears to be some misalignment between your stated motivations and your chosen \
             career path. It might be worth exploring whether this goal truly resonates with your \
             interests and strengths.",
            "Your openness to different approaches to learning and problem-solving shows \
             adaptability, which is valuable in any field.",
            "Take time to reflect on what genuinely excites you about this career beyond external \
             factors like salary or prestige.",
        ),
    };

    GoalValidationVerdict {
        validated_goal: user_goal.to_string(),
        validation_status: status,
        validation_summary: summary.to_string(),
        actionable_insights: ActionableInsights {
            superpower: superpower.to_string(),
            thing_to_consider: thing_to_consider.to_string(),
        },
    }
}

pub async fn validate_alignment(
    invoker: &StructuredPromptInvoker,
    user_goal: &str,
    answers: &QuizAnswers,
) -> Result<Resolved<GoalValidationVerdict>, AppError> {
    let prompt = ALIGNMENT_PROMPT.render(&[
        ("user_goal", &inline_value(user_goal)),
        ("primary_drive", &inline_value(&answers.primary_drive)),
        ("ten_year_vision", &inline_value(&answers.ten_year_vision)),
        (
            "problem_solving_approach",
            &inline_value(&answers.problem_solving_approach),
        ),
        (
            "preferred_learning_style",
            &inline_value(&answers.preferred_learning_style),
        ),
        ("confidence_rating", &inline_value(&answers.confidence_rating)),
        ("json_only", JSON_ONLY_INSTRUCTION),
    ])?;

    let result = invoker
        .invoke::<GoalValidationVerdict>(&prompt, &ALIGNMENT_SHAPE)
        .await
        .map(|mut verdict| {
            if verdict.validated_goal.trim().is_empty() {
                verdict.validated_goal = user_goal.to_string();
            }
            verdict
        });

    Ok(resolve("goal alignment", result, |_| {
        fallback_verdict(user_goal, answers)
    }))
}
