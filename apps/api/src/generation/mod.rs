// Question generation: small-talk filter, prompt assembly and the single LLM call.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod classifier;
pub mod generator;
pub mod handlers;
pub mod prompts;
