//! Skill-level analysis of a completed assessment.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::invoker::{resolve, ExpectedShape, Resolved, StructuredPromptInvoker};
use crate::llm_client::prompts::{inline_value, JSON_ONLY_INSTRUCTION};

use super::prompts::ANALYSIS_PROMPT;

/// A question as echoed back by the client. Category and difficulty are not
/// needed for analysis and are ignored if present.
#[derive(Debug, Clone, Deserialize)]
pub struct AnsweredQuestion {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessment {
    /// 0 Absolute Beginner, 1 Novice, 2 Apprentice, 3 Advanced, 4 Expert.
    pub skill_level: u8,
    pub analysis_summary: String,
    pub strengths: Vec<String>,
    pub learning_opportunities: Vec<String>,
}

const ASSESSMENT_SHAPE: ExpectedShape = ExpectedShape {
    name: "skill assessment",
    required: &[
        "skillLevel",
        "analysisSummary",
        "strengths",
        "learningOpportunities",
    ],
};

pub fn default_analysis() -> SkillAssessment {
    SkillAssessment {
        skill_level: 1,
        analysis_summary: "You're taking your first steps in this exciting field! Your enthusiasm \
            to learn is your greatest asset. With dedication and the right guidance, you'll \
            progress quickly."
            .to_string(),
        strengths: vec![
            "Enthusiasm to learn".to_string(),
            "Willingness to grow".to_string(),
        ],
        learning_opportunities: vec![
            "Start with foundational courses in your chosen field".to_string(),
            "Complete hands-on beginner projects".to_string(),
            "Join online communities and forums for support".to_string(),
            "Practice regularly to build muscle memory".to_string(),
        ],
    }
}

/// One `* "question": Yes|No` line per question; unanswered counts as No.
pub fn format_answers(questions: &[AnsweredQuestion], answers: &HashMap<String, bool>) -> String {
    questions
        .iter()
        .map(|q| {
            let answer = if answers.get(&q.id).copied().unwrap_or(false) {
                "Yes"
            } else {
                "No"
            };
            format!("* \"{}\": {}", inline_value(&q.text), answer)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn analyze_skills(
    invoker: &StructuredPromptInvoker,
    role_name: &str,
    questions: &[AnsweredQuestion],
    answers: &HashMap<String, bool>,
    open_response: Option<&str>,
) -> Result<Resolved<SkillAssessment>, AppError> {
    let formatted_answers = format_answers(questions, answers);
    let open_response = open_response
        .filter(|r| !r.trim().is_empty())
        .unwrap_or("No response provided");

    let prompt = ANALYSIS_PROMPT.render(&[
        ("role_name", &inline_value(role_name)),
        ("formatted_answers", &formatted_answers),
        ("open_response", &inline_value(open_response)),
        ("json_only", JSON_ONLY_INSTRUCTION),
    ])?;

    let result = invoker
        .invoke::<SkillAssessment>(&prompt, &ASSESSMENT_SHAPE)
        .await;
    Ok(resolve("skill analysis", result, |_| default_analysis()))
}
