//! LLM integration - OpenAI-compatible chat completions

pub mod traits;
pub mod config;
pub mod providers;

#[cfg(test)]
mod tests;

pub use traits::{LLM, LLMMessage, LLMResponse, LLMError, LLMResult, LLMUsage};
pub use config::{LLMConfig, LLMProvider};
pub use providers::OpenAICompatProvider;
