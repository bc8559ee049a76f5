// Prompt templates for the skill assessment flow.

use crate::llm_client::prompts::PromptTemplate;

/// Replace: {role_name}, {json_only}
pub const QUESTIONS_PROMPT: PromptTemplate = PromptTemplate::new(
    "skill-questions",
    r#"ROLE:
You are a senior hiring manager and technical lead with 15+ years of experience in {role_name}. Create a concise, practical skill assessment for a beginner who is new to the field.

CONTEXT:
A user has selected "{role_name}" as their career path. The assessment must gauge their current foundational knowledge and practical experience.

TASK:
Write exactly 10 specific "Yes/No" or "Have you ever..." style questions covering the most important foundational tools, concepts and practical skills a beginner in {role_name} should be familiar with.

OUTPUT FORMAT:
{json_only}

{
  "questions": [
    "Have you ever worked with [A TOOL USED IN THIS ROLE]?",
    "Do you understand [A CORE CONCEPT OF THIS ROLE]?",
    "Have you built or contributed to [A TYPICAL PROJECT IN THIS ROLE]?"
  ]
}

Additional Requirements:
1. Focus exclusively on {role_name}; do not give generic examples.
2. Ask about specific tools, technologies and frameworks commonly used in {role_name}.
3. Ask about hands-on experience with real projects or coursework.
4. Every question must help determine the user's current skill level in {role_name}."#,
);

/// Replace: {role_name}, {formatted_answers}, {open_response}, {json_only}
pub const ANALYSIS_PROMPT: PromptTemplate = PromptTemplate::new(
    "skill-analysis",
    r#"ROLE:
You are an expert career mentor and performance coach. Analyze a student's self-assessed skill level for their chosen career and give a clear, encouraging and actionable evaluation.

CONTEXT:
A student answered a skill assessment for the career "{role_name}".

User's Checklist Answers:
{formatted_answers}

User's Open Response Answer: "{open_response}"

TASK:
1. Skill Level: assign a single level from 0 to 4.
   * 0: Absolute Beginner (little to no experience)
   * 1: Novice (theoretical knowledge, little practical application)
   * 2: Apprentice (some small projects or courses completed)
   * 3: Advanced (solid practical experience, works independently)
   * 4: Expert (deep knowledge and extensive project experience)
2. Analysis Summary: a brief, encouraging summary of where they stand (2-3 sentences).
3. Strengths: 1-2 strengths drawn from their "Yes" answers and open response.
4. Learning Opportunities: the top 2-3 areas to focus on first, drawn from their "No" answers.

Treat every "No" answer as a genuine gap, and weigh any hands-on experience in the open response.

OUTPUT FORMAT:
{json_only}

{
  "skillLevel": 2,
  "analysisSummary": "string",
  "strengths": ["string"],
  "learningOpportunities": ["string"]
}"#,
);
