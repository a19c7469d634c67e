// Idea and article generation.
// Implements: prompt building, the markdown idea parser, and the generation pipeline.
// All completions go through llm_client — no direct Anthropic API calls here.

pub mod generator;
pub mod handlers;
pub mod idea_parser;
pub mod prompt_builder;
pub mod prompts;
