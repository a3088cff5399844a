// Resume analysis: upload validation, prompt construction, and the /analyze handler.
// All LLM calls go through llm_client; all PDF parsing goes through extraction.

pub mod handlers;
pub mod prompts;
pub mod validation;
