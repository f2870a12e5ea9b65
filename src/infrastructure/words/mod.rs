//! Word of the day - generation, caching and fallback

pub mod generator;
pub mod provider;

pub use generator::{parse_completion, LlmWordGenerator};
pub use provider::{CachedWordProvider, StaticWordProvider, WordCache};
