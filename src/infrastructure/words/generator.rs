//! Word generation through an LLM

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::Deserialize;
use std::sync::Arc;

use crate::application::errors::GenerationError;
use crate::domain::entities::word::{is_valid_word, DailyWord};
use crate::domain::traits::WordGenerator;
use crate::infrastructure::llm::{LLMConfig, LLMError, LLMMessage, OpenAICompatProvider, LLM};

pub const SYSTEM_PROMPT: &str = "You are the puzzle master of a daily word-guessing game. \
You always answer with a single JSON object and nothing else.";

pub const USER_PROMPT: &str = "Choose today's secret word: one common English word of exactly 5 letters \
related to business, finance or economics. Reply with a JSON object with these fields:\n\
- \"word\": the 5-letter word\n\
- \"definition\": a one-sentence definition that does not contain the word\n\
- \"hint\": a short extra clue that does not contain the word\n\
- \"difficulty\": one of \"easy\", \"medium\" or \"hard\"\n\
- \"category\": a one or two word topic, e.g. \"Banking\"";

/// First `{ ... }` block in a completion, tolerating Markdown fences around it
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Payload the model is asked to return
#[derive(Debug, Deserialize)]
struct GeneratedWord {
    word: Option<String>,
    definition: Option<String>,
    hint: Option<String>,
    difficulty: Option<String>,
    category: Option<String>,
}

/// Parse and validate a completion into a [`DailyWord`]
pub fn parse_completion(content: &str) -> Result<DailyWord, GenerationError> {
    let json = JSON_OBJECT
        .find(content)
        .map(|m| m.as_str())
        .ok_or_else(|| GenerationError::InvalidResponse("no JSON object in completion".to_string()))?;

    let generated: GeneratedWord =
        serde_json::from_str(json).map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

    let word = generated
        .word
        .map(|w| w.trim().to_string())
        .ok_or_else(|| GenerationError::InvalidResponse("missing \"word\" field".to_string()))?;
    if !is_valid_word(&word) {
        return Err(GenerationError::InvalidWord(word));
    }

    let definition = generated
        .definition
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .ok_or_else(|| GenerationError::InvalidResponse("missing \"definition\" field".to_string()))?;

    let mut daily = DailyWord::new(word, definition);
    daily.hint = non_blank(generated.hint);
    daily.difficulty = non_blank(generated.difficulty);
    daily.category = non_blank(generated.category);
    Ok(daily)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Asks an LLM for the word of the day with a fixed prompt
pub struct LlmWordGenerator {
    llm: Option<Arc<dyn LLM>>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl LlmWordGenerator {
    pub fn new(llm: Arc<dyn LLM>) -> Self {
        Self {
            llm: Some(llm),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Build from config. Without an API key every call fails with
    /// [`GenerationError::MissingApiKey`].
    pub fn from_config(config: &LLMConfig) -> Self {
        let llm = match OpenAICompatProvider::from_config(config) {
            Ok(provider) => Some(Arc::new(provider.with_json_mode(true)) as Arc<dyn LLM>),
            Err(e) => {
                tracing::warn!("Word generator disabled: {}", e);
                None
            }
        };

        Self {
            llm,
            temperature: Some(config.temperature),
            max_tokens: config.max_tokens,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }
}

#[async_trait]
impl WordGenerator for LlmWordGenerator {
    async fn generate(&self) -> Result<DailyWord, GenerationError> {
        let llm = self.llm.as_ref().ok_or(GenerationError::MissingApiKey)?;

        let messages = vec![LLMMessage::system(SYSTEM_PROMPT), LLMMessage::user(USER_PROMPT)];
        let response = llm
            .chat(messages, None, self.temperature, self.max_tokens)
            .await
            .map_err(|e| match e {
                LLMError::MissingApiKey => GenerationError::MissingApiKey,
                other => GenerationError::Request(other.to_string()),
            })?;

        tracing::debug!("{} ({}) replied: {}", llm.name(), response.model, response.content);
        parse_completion(&response.content)
    }
}
