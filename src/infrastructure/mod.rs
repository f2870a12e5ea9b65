//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - LLM: Chat-completion clients
//! - Words: Word of the day generation and caching
//! - Storage: In-memory session store
//! - Adapters: Platform integrations (Telegram, console)

pub mod config;
pub mod llm;
pub mod words;
pub mod storage;
pub mod adapters;
