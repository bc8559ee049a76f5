// Goal validation: legitimacy screening of a stated career goal, then an
// AI alignment verdict scored into an external-pressure percentage.

pub mod alignment;
pub mod handlers;
pub mod legitimacy;
pub mod pressure;
pub mod prompts;
