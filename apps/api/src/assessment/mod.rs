// Skill assessment: role-specific yes/no questions, then an AI analysis of the answers.
// All LLM calls go through llm_client::invoker.

pub mod analysis;
pub mod handlers;
pub mod prompts;
pub mod questions;
