//! Skill question generation, keyword categorization and default question banks.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::invoker::{
    resolve, ExpectedShape, InvocationError, Resolved, StructuredPromptInvoker,
};
use crate::llm_client::prompts::{inline_value, JSON_ONLY_INSTRUCTION};

use super::prompts::QUESTIONS_PROMPT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Technical,
    Soft,
    Experience,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl QuestionCategory {
    fn initial(self) -> char {
        match self {
            QuestionCategory::Technical => 't',
            QuestionCategory::Soft => 's',
            QuestionCategory::Experience | QuestionCategory::Education => 'e',
        }
    }
}

impl Difficulty {
    fn initial(self) -> char {
        match self {
            Difficulty::Beginner => 'b',
            Difficulty::Intermediate => 'i',
            Difficulty::Advanced => 'a',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillQuestion {
    pub id: String,
    pub text: String,
    pub category: QuestionCategory,
    pub difficulty: Difficulty,
}

/// What the model is asked to return: plain question strings.
#[derive(Debug, Deserialize)]
struct GeneratedQuestions {
    questions: Vec<String>,
}

const QUESTIONS_SHAPE: ExpectedShape = ExpectedShape {
    name: "skill questions",
    required: &["questions"],
};

const SOFT_KEYWORDS: &[&str] = &["team", "communicat", "collaborat", "present"];
const EXPERIENCE_KEYWORDS: &[&str] = &["project", "built", "created", "developed"];
const EDUCATION_KEYWORDS: &[&str] = &["course", "educat", "certificat", "train"];
const ADVANCED_KEYWORDS: &[&str] = &["advanced", "complex", "expert", "master"];
const INTERMEDIATE_KEYWORDS: &[&str] = &["intermediate", "moderate", "solid", "good"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// First matching keyword group wins; technical otherwise.
pub fn categorize(question: &str) -> QuestionCategory {
    let lower = question.to_lowercase();
    if contains_any(&lower, SOFT_KEYWORDS) {
        QuestionCategory::Soft
    } else if contains_any(&lower, EXPERIENCE_KEYWORDS) {
        QuestionCategory::Experience
    } else if contains_any(&lower, EDUCATION_KEYWORDS) {
        QuestionCategory::Education
    } else {
        QuestionCategory::Technical
    }
}

pub fn difficulty_of(question: &str) -> Difficulty {
    let lower = question.to_lowercase();
    if contains_any(&lower, ADVANCED_KEYWORDS) {
        Difficulty::Advanced
    } else if contains_any(&lower, INTERMEDIATE_KEYWORDS) {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    }
}

/// Ids are category initial + difficulty initial + 1-based position, e.g. `sb3`.
pub fn to_skill_questions(texts: Vec<String>) -> Vec<SkillQuestion> {
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let category = categorize(&text);
            let difficulty = difficulty_of(&text);
            SkillQuestion {
                id: format!("{}{}{}", category.initial(), difficulty.initial(), index + 1),
                text,
                category,
                difficulty,
            }
        })
        .collect()
}

use Difficulty::{Beginner, Intermediate};
use QuestionCategory::{Education, Experience, Soft, Technical};

type Bank = &'static [(&'static str, &'static str, QuestionCategory, Difficulty)];

const SOFTWARE_ENGINEER_BANK: Bank = &[
    ("t1", "Have you ever written code in any programming language?", Technical, Beginner),
    ("t2", "Do you understand basic data structures like arrays and lists?", Technical, Beginner),
    ("t3", "Can you debug simple programming errors?", Technical, Beginner),
    ("s1", "Can you explain technical concepts to non-technical people?", Soft, Beginner),
    ("e1", "Have you built any personal projects, even small ones?", Experience, Beginner),
    ("e2", "Have you used version control systems like Git?", Experience, Beginner),
    ("t4", "Do you understand basic algorithms like sorting?", Technical, Intermediate),
    ("t5", "Have you worked with databases?", Technical, Intermediate),
    ("s2", "Can you work effectively in a team environment?", Soft, Beginner),
    ("e3", "Have you completed any coding courses or tutorials?", Education, Beginner),
];

const DATA_SCIENTIST_BANK: Bank = &[
    ("t1", "Have you ever used Python or R for data analysis?", Technical, Beginner),
    ("t2", "Do you understand basic statistics and probability?", Technical, Beginner),
    ("t3", "Can you clean and preprocess messy data?", Technical, Beginner),
    ("s1", "Can you translate business questions into analytical frameworks?", Soft, Beginner),
    ("e1", "Have you worked on any data analysis projects?", Experience, Beginner),
    ("e2", "Have you created data visualizations?", Experience, Beginner),
    ("t4", "Do you understand machine learning concepts?", Technical, Intermediate),
    ("t5", "Have you used SQL to query databases?", Technical, Intermediate),
    ("s2", "Can you communicate insights effectively?", Soft, Intermediate),
    ("e3", "Have you completed any data science courses?", Education, Beginner),
];

const ENTREPRENEUR_BANK: Bank = &[
    ("t1", "Have you ever identified a problem and thought of a solution for it?", Technical, Beginner),
    ("s1", "Can you communicate your ideas effectively to others?", Soft, Beginner),
    ("e1", "Have you ever started a small business or project, even a hobby one?", Experience, Beginner),
    ("e2", "Have you researched the market or competition for an idea?", Experience, Beginner),
    ("t2", "Do you understand basic financial concepts like profit and loss?", Technical, Beginner),
    ("s2", "Can you work with uncertainty and adapt to changing situations?", Soft, Beginner),
    ("e3", "Have you created any business plans or pitch decks?", Experience, Intermediate),
    ("t3", "Do you understand basic marketing concepts?", Technical, Beginner),
    ("s3", "Can you lead and motivate a team towards a common goal?", Soft, Intermediate),
    ("e4", "Have you raised any funds or investments for a project?", Experience, Intermediate),
];

const GENERAL_BANK: Bank = &[
    ("t1", "Have you worked with computers regularly?", Technical, Beginner),
    ("s1", "Do you communicate effectively with others?", Soft, Beginner),
    ("e1", "Have you completed any relevant courses or training?", Education, Beginner),
    ("e2", "Have you worked on any projects, even personal ones?", Experience, Beginner),
    ("t2", "Are you comfortable learning new software tools?", Technical, Beginner),
    ("s2", "Can you work in team environments?", Soft, Beginner),
    ("e3", "Have you solved problems systematically?", Experience, Beginner),
    ("t3", "Are you committed to continuous learning?", Technical, Beginner),
    ("s3", "Can you adapt to new situations?", Soft, Beginner),
    ("e4", "Have you sought out learning opportunities?", Education, Beginner),
];

/// Default bank for a role: exact id match, then any entrepreneur mention, then general.
pub fn default_questions(role_id: &str, role_name: &str) -> Vec<SkillQuestion> {
    let bank = match role_id {
        "software-engineer" => SOFTWARE_ENGINEER_BANK,
        "data-scientist" => DATA_SCIENTIST_BANK,
        "entrepreneur" => ENTREPRENEUR_BANK,
        _ if role_id.contains("entrepreneur")
            || role_name.to_lowercase().contains("entrepreneur") =>
        {
            ENTREPRENEUR_BANK
        }
        _ => GENERAL_BANK,
    };

    bank.iter()
        .map(|(id, text, category, difficulty)| SkillQuestion {
            id: id.to_string(),
            text: text.to_string(),
            category: *category,
            difficulty: *difficulty,
        })
        .collect()
}

/// Without a credential the role's own bank is served; any other failure
/// serves the general bank unless fallbacks are personalized.
pub async fn generate_questions(
    invoker: &StructuredPromptInvoker,
    role_id: &str,
    role_name: &str,
    personalized_fallback: bool,
) -> Result<Resolved<Vec<SkillQuestion>>, AppError> {
    let prompt = QUESTIONS_PROMPT.render(&[
        ("role_name", &inline_value(role_name)),
        ("json_only", JSON_ONLY_INSTRUCTION),
    ])?;

    let result = invoker
        .invoke::<GeneratedQuestions>(&prompt, &QUESTIONS_SHAPE)
        .await
        .map(|generated| to_skill_questions(generated.questions));

    Ok(resolve("skill questions", result, |e| match e {
        InvocationError::CredentialMissing => default_questions(role_id, role_name),
        _ if personalized_fallback => default_questions(role_id, role_name),
        _ => default_questions("default", "General Role"),
    }))
}
