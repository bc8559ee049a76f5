// Prompt templates for goal validation.

use crate::llm_client::prompts::PromptTemplate;

/// Replace: {user_goal}
pub const LEGITIMACY_PROMPT: PromptTemplate = PromptTemplate::new(
    "goal-legitimacy",
    r#"You are a career validation expert. Decide whether the following text represents a VALID CAREER GOAL or PROFESSION.

User Input: "{user_goal}"

A VALID career goal is:
- A profession, job title, or career path (e.g., "Software Developer", "Doctor", "Teacher", "Business Analyst")
- A field of work (e.g., "Healthcare", "Technology", "Education")
- A specific role (e.g., "Data Scientist", "Marketing Manager", "Architect")

An INVALID career goal is:
- A personal characteristic, emotion or adjective (e.g., "happy", "tall", "smart")
- Random words or gibberish (e.g., "xyz", "abc", "123")
- Offensive or inappropriate content
- Any other non-career term

Respond with ONLY a JSON object in this exact format:
{
  "isValid": true or false,
  "reason": "Brief explanation (only if invalid)"
}

Examples:
Input: "Software Developer" → {"isValid": true, "reason": ""}
Input: "xyz" → {"isValid": false, "reason": "This does not appear to be a valid career or profession."}
Input: "happy" → {"isValid": false, "reason": "This is an emotion, not a career goal."}
Input: "AI Engineer" → {"isValid": true, "reason": ""}

Now validate: "{user_goal}""#,
);

/// Replace: {user_goal}, {primary_drive}, {ten_year_vision},
///          {problem_solving_approach}, {preferred_learning_style},
///          {confidence_rating}, {json_only}
pub const ALIGNMENT_PROMPT: PromptTemplate = PromptTemplate::new(
    "goal-alignment",
    r#"ROLE:
You are an expert career counselor and performance coach for the Indian context. You help ambitious students validate their chosen career goals with a balanced analysis of strengths and potential challenges, not just encouragement.

CONTEXT:
A student has decided on a career goal and answered a 5-question validation quiz.

* User's Stated Career Goal: "{user_goal}"
* User's Validation Quiz Answers:
    1. Primary Drive: "{primary_drive}"
    2. 10-Year Vision: "{ten_year_vision}"
    3. Problem-Solving Approach: "{problem_solving_approach}"
    4. Preferred Learning Style: "{preferred_learning_style}"
    5. Confidence Rating (1-5): "{confidence_rating}"

TASK:
Part 1: Alignment
1. Critically assess how well the user's motivations and preferences align with the demands and realities of the chosen career.
2. Assign exactly one validation status:
   * "Excellent Match": drivers and goals are strongly aligned with the career.
   * "Good Foundation": solid alignment with some areas for growth or consideration.
   * "Requires Reflection": only for a significant mismatch between the goal and their core motivations.
3. Write a 2-3 sentence validation summary. Be encouraging but realistic. DO NOT quote the user's specific answers in the summary.

Part 2: Actionable Insights
1. "superpower": the user's single biggest strength for this goal.
2. "thingToConsider": one potential challenge or area for self-awareness, framed constructively.

OUTPUT FORMAT:
{json_only}

{
  "validatedGoal": "{user_goal}",
  "validationStatus": "Excellent Match",
  "validationSummary": "string",
  "actionableInsights": {
    "superpower": "string",
    "thingToConsider": "string"
  }
}"#,
);
