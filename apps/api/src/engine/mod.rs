// Conversational query engine.
// Implements: grounding context, intent classification, generation client,
// recommendation parsing, session governor, and the query pipeline that ties them together.
// All LLM calls go through llm_client — no direct Anthropic API calls here.

pub mod generator;
pub mod governor;
pub mod grounding;
pub mod handlers;
pub mod intent;
pub mod prompts;
pub mod query;
pub mod recommendation;

#[cfg(test)]
pub mod testing;
