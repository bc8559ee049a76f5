// Prompt templates for the role deep dive.

use crate::llm_client::prompts::PromptTemplate;

/// Replace: {role}, {persona_context}, {json_only}
pub const DEEP_DIVE_PROMPT: PromptTemplate = PromptTemplate::new(
    "role-deep-dive",
    r#"ROLE:
You are an experienced career counselor for students in India. Give an honest, practical overview of a career so a student can decide whether to pursue it.

CONTEXT:
Career the student is exploring: "{role}"
What we know about the student: "{persona_context}"

TASK:
Describe the role "{role}" with:
1. A 1-2 sentence description of what the role involves.
2. Exactly 5 typical daily responsibilities.
3. Salary ranges in Indian Rupees (LPA) for entry, mid and senior levels.
4. A 5-step career path with approximate years of experience for each step.
5. Exactly 5 required skills.
6. The typical education needed.
7. A one-sentence summary of the current job market for this role.

OUTPUT FORMAT:
{json_only}

{
  "role": "{role}",
  "description": "string",
  "dailyResponsibilities": ["string"],
  "salaryRange": {"entry": "₹3-6 LPA", "mid": "₹6-12 LPA", "senior": "₹12-25 LPA+"},
  "careerPath": ["Year 1: ..."],
  "requiredSkills": ["string"],
  "education": "string",
  "jobMarket": "string"
}"#,
);
