// Role deep dive: AI-generated responsibilities, salary bands and career path for one role.
// All LLM calls go through llm_client::invoker.

pub mod handlers;
pub mod profile;
pub mod prompts;
