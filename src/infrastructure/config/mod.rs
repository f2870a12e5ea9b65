//! Configuration management

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::infrastructure::llm::LLMConfig;

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub telegram: TelegramConfig,
    pub llm: LLMConfig,
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
    /// Bypasses the daily limit and uses long polling instead of the webhook
    pub dev_mode: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TelegramConfig {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WebhookConfig {
    /// Address the webhook server binds to
    pub listen: String,
    /// Public HTTPS base URL Telegram should call, without the token path
    pub public_url: Option<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "wordday-bot".to_string(),
            prefix: "/".to_string(),
            dev_mode: false,
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
            public_url: None,
        }
    }
}

/// How updates reach the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    LongPolling,
    Webhook,
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Overlay environment variables onto this config
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            self.telegram.token = Some(token);
        }

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }

        if let Ok(flag) = std::env::var("DEV_MODE") {
            self.bot.dev_mode = parse_flag(&flag);
        }

        if let Ok(url) = std::env::var("WEBHOOK_URL") {
            self.webhook.public_url = Some(url);
        }

        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.webhook.listen = format!("0.0.0.0:{}", port);
            }
        }

        self.llm.apply_env();
    }

    pub fn transport(&self) -> Transport {
        if self.bot.dev_mode {
            Transport::LongPolling
        } else {
            Transport::Webhook
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.telegram.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.webhook
            .listen
            .parse()
            .map_err(|e| ConfigError::InvalidValue(format!("webhook.listen {:?}: {}", self.webhook.listen, e)))
    }

    /// Check everything the Telegram transports need
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token().is_none() {
            return Err(ConfigError::MissingField("telegram.token".to_string()));
        }

        if self.bot.prefix.is_empty() {
            return Err(ConfigError::InvalidValue("bot.prefix must not be empty".to_string()));
        }

        if self.transport() == Transport::Webhook {
            self.listen_addr()?;
            if self.webhook.public_url.is_none() {
                tracing::warn!("webhook.public-url not set; Telegram must already know the webhook URL");
            }
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
