//! Deep-dive profile generation and its fallback payload.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::invoker::{resolve, ExpectedShape, Resolved, StructuredPromptInvoker};
use crate::llm_client::prompts::{inline_value, JSON_ONLY_INSTRUCTION};

use super::prompts::DEEP_DIVE_PROMPT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub entry: String,
    pub mid: String,
    pub senior: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDeepDive {
    pub role: String,
    pub description: String,
    pub daily_responsibilities: Vec<String>,
    pub salary_range: SalaryRange,
    pub career_path: Vec<String>,
    pub required_skills: Vec<String>,
    pub education: String,
    pub job_market: String,
}

pub const DEEP_DIVE_SHAPE: ExpectedShape = ExpectedShape {
    name: "role deep dive",
    required: &[
        "role",
        "description",
        "dailyResponsibilities",
        "salaryRange",
        "careerPath",
        "requiredSkills",
        "education",
        "jobMarket",
    ],
};

const FALLBACK_ROLE: &str = "Software Engineer";

/// Canned profile served whenever generation fails.
///
/// It always describes a Software Engineer. With `requested_role` set, only
/// the `role` label is replaced; the body text stays generic.
pub fn fallback_profile(requested_role: Option<&str>) -> RoleDeepDive {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    RoleDeepDive {
        role: requested_role.unwrap_or(FALLBACK_ROLE).to_string(),
        description: "A Software Engineer designs, develops, and maintains software applications and systems."
            .to_string(),
        daily_responsibilities: strings(&[
            "Writing and testing code",
            "Debugging and resolving issues",
            "Collaborating with team members",
            "Participating in code reviews",
            "Documenting technical specifications",
        ]),
        salary_range: SalaryRange {
            entry: "₹3-6 LPA".to_string(),
            mid: "₹6-12 LPA".to_string(),
            senior: "₹12-25 LPA+".to_string(),
        },
        career_path: strings(&[
            "Year 1: Junior Developer",
            "Year 2: Software Engineer",
            "Year 3: Senior Engineer",
            "Year 5: Tech Lead",
            "Year 7-10: Engineering Manager/Architect",
        ]),
        required_skills: strings(&[
            "Programming languages (Java, Python, etc.)",
            "Problem-solving abilities",
            "Communication skills",
            "Team collaboration",
            "Continuous learning mindset",
        ]),
        education: "Bachelor's degree in Computer Science or related field".to_string(),
        job_market: "High demand across various industries with good growth prospects".to_string(),
    }
}

pub async fn generate_role_deep_dive(
    invoker: &StructuredPromptInvoker,
    role: &str,
    persona_context: &str,
    personalized_fallback: bool,
) -> Result<Resolved<RoleDeepDive>, AppError> {
    let prompt = DEEP_DIVE_PROMPT.render(&[
        ("role", &inline_value(role)),
        ("persona_context", &inline_value(persona_context)),
        ("json_only", JSON_ONLY_INSTRUCTION),
    ])?;

    let result = invoker.invoke::<RoleDeepDive>(&prompt, &DEEP_DIVE_SHAPE).await;
    Ok(resolve("deep dive", result, |_| {
        fallback_profile(personalized_fallback.then_some(role))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{invoker_with, FailingModel, ScriptedModel};

    const MODEL_REPLY: &str = r#"Here is the overview:
{
  "role": "UX Designer",
  "description": "Designs user experiences.",
  "dailyResponsibilities": ["Research", "Wireframes"],
  "salaryRange": {"entry": "₹4-7 LPA", "mid": "₹8-15 LPA", "senior": "₹18-30 LPA+"},
  "careerPath": ["Year 1: Junior UX Designer"],
  "requiredSkills": ["Figma"],
  "education": "Any degree with a design portfolio",
  "jobMarket": "Growing steadily"
}"#;

    #[test]
    fn test_fallback_reports_software_engineer_by_default() {
        assert_eq!(fallback_profile(None).role, "Software Engineer");
    }

    #[test]
    fn test_fallback_can_echo_requested_role() {
        let profile = fallback_profile(Some("UX Designer"));
        assert_eq!(profile.role, "UX Designer");
        assert_eq!(profile.salary_range.entry, "₹3-6 LPA");
    }

    #[test]
    fn test_fallback_serializes_camel_case() {
        let value = serde_json::to_value(fallback_profile(None)).unwrap();
        for field in DEEP_DIVE_SHAPE.required {
            assert!(value.get(*field).is_some(), "missing {field}");
        }
        assert_eq!(value["salaryRange"]["senior"], "₹12-25 LPA+");
    }

    #[tokio::test]
    async fn test_generate_uses_model_result() {
        let model = ScriptedModel::new(MODEL_REPLY);
        let invoker = invoker_with(model.clone(), Some("key"));

        let resolved = generate_role_deep_dive(&invoker, "UX Designer", "Likes drawing", false)
            .await
            .unwrap();
        assert!(!resolved.used_fallback);
        assert_eq!(resolved.value.role, "UX Designer");
        assert_eq!(resolved.value.salary_range.mid, "₹8-15 LPA");

        let prompt = model.last_prompt().unwrap();
        assert!(prompt.contains("Career the student is exploring: \"UX Designer\""));
        assert!(prompt.contains("Likes drawing"));
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_model_failure() {
        let invoker = invoker_with(FailingModel::new(), Some("key"));
        let resolved = generate_role_deep_dive(&invoker, "UX Designer", "", false)
            .await
            .unwrap();
        assert!(resolved.used_fallback);
        assert_eq!(resolved.value, fallback_profile(None));
    }

    #[tokio::test]
    async fn test_personalized_fallback_keeps_requested_role() {
        let invoker = invoker_with(FailingModel::new(), Some("key"));
        let resolved = generate_role_deep_dive(&invoker, "UX Designer", "", true)
            .await
            .unwrap();
        assert_eq!(resolved.value.role, "UX Designer");
    }
}
