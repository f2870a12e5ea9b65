//! Tests for LLM configuration and providers

use crate::infrastructure::llm::{LLMConfig, LLMError, LLMMessage, LLMProvider, OpenAICompatProvider, LLM};

#[tokio::test]
#[ignore] // Requires OPENAI_API_KEY environment variable
async fn test_openai_chat() {
    let config = LLMConfig::from_env();
    let provider = OpenAICompatProvider::from_config(&config).expect("OPENAI_API_KEY not set");

    let messages = vec![
        LLMMessage::system("You are a helpful assistant."),
        LLMMessage::user("Say 'hello' in exactly one word."),
    ];

    let response = provider.chat(messages, None, Some(0.5), Some(10))
        .await
        .expect("Chat request failed");

    assert!(!response.content.is_empty());
}

#[test]
fn test_llm_message_builder() {
    let msg = LLMMessage::user("Hello");
    assert_eq!(msg.role, "user");
    assert_eq!(msg.content, "Hello");

    let system_msg = LLMMessage::system("You are helpful.");
    assert_eq!(system_msg.role, "system");
}

#[test]
fn test_provider_defaults() {
    let config = LLMConfig::default();
    assert_eq!(config.provider, LLMProvider::OpenAI);
    assert_eq!(config.base_url(), "https://api.openai.com/v1");
    assert_eq!(config.model(), "gpt-4o-mini");

    let groq = LLMConfig {
        provider: LLMProvider::Groq,
        ..LLMConfig::default()
    };
    assert_eq!(groq.base_url(), "https://api.groq.com/openai/v1");
}

#[test]
fn test_provider_from_name() {
    assert_eq!(LLMProvider::from_name("Groq"), Some(LLMProvider::Groq));
    assert_eq!(LLMProvider::from_name("openai"), Some(LLMProvider::OpenAI));
    assert_eq!(LLMProvider::from_name("minimax"), None);
}

#[test]
fn test_blank_api_key_is_missing() {
    let config = LLMConfig {
        api_key: Some("   ".to_string()),
        ..LLMConfig::default()
    };
    assert_eq!(config.api_key(), None);
    assert!(matches!(
        OpenAICompatProvider::from_config(&config),
        Err(LLMError::MissingApiKey)
    ));
}

#[test]
fn test_config_yaml_defaults() {
    let config: LLMConfig = serde_yaml::from_str("provider: groq\nmodel: llama-3.3-70b-versatile\n").unwrap();
    assert_eq!(config.provider, LLMProvider::Groq);
    assert_eq!(config.model(), "llama-3.3-70b-versatile");
    assert_eq!(config.max_tokens, Some(300));
}
