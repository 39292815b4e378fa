// Content acquisition: descriptors in, structured content record out.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod provider;
