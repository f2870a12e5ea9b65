//! LLM Configuration

use serde::{Deserialize, Serialize};

/// LLM Provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LLMProvider {
    OpenAI,
    Groq,
}

impl Default for LLMProvider {
    fn default() -> Self {
        Self::OpenAI
    }
}

impl LLMProvider {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "openai" => Some(Self::OpenAI),
            "groq" => Some(Self::Groq),
            _ => None,
        }
    }

    /// Base URL of the provider's OpenAI-compatible API
    pub fn api_base(&self) -> &'static str {
        match self {
            Self::OpenAI => "https://api.openai.com/v1",
            Self::Groq => "https://api.groq.com/openai/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAI => "gpt-4o-mini",
            Self::Groq => "llama-3.1-8b-instant",
        }
    }
}

/// LLM Configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LLMConfig {
    /// Provider used for word generation
    pub provider: LLMProvider,

    pub api_key: Option<String>,
    pub model: Option<String>,
    /// Overrides the provider's API base (self-hosted gateways, tests)
    pub base_url: Option<String>,

    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::OpenAI,
            api_key: None,
            model: None,
            base_url: None,
            temperature: 0.9,
            max_tokens: Some(300),
        }
    }
}

impl LLMConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables onto this config
    pub fn apply_env(&mut self) {
        if let Ok(name) = std::env::var("LLM_PROVIDER") {
            match LLMProvider::from_name(&name) {
                Some(provider) => self.provider = provider,
                None => tracing::warn!("Unknown LLM_PROVIDER {:?}, keeping {:?}", name, self.provider),
            }
        }

        let key_var = match self.provider {
            LLMProvider::OpenAI => "OPENAI_API_KEY",
            LLMProvider::Groq => "GROQ_API_KEY",
        };
        if let Ok(key) = std::env::var(key_var) {
            self.api_key = Some(key);
        }
        if let Ok(key) = std::env::var("LLM_API_KEY") {
            self.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("LLM_MODEL") {
            self.model = Some(model);
        }

        if let Ok(url) = std::env::var("LLM_BASE_URL") {
            self.base_url = Some(url);
        }

        if let Ok(temp) = std::env::var("LLM_TEMPERATURE") {
            if let Ok(t) = temp.parse() {
                self.temperature = t;
            }
        }
    }

    /// API key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(self.provider.default_model())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(self.provider.api_base())
    }
}
