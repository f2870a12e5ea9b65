//! Message parser - Parses raw messages into structured messages

use crate::domain::entities::{Content, Message, User};

/// Parses incoming messages into structured Message objects
pub struct MessageParser {
    command_prefix: String,
    bot_username: Option<String>,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
            bot_username: None,
        }
    }

    /// Strip `@username` suffixes addressed to this bot from command names
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>, sender: Option<User>) -> Message {
        let text = text.into();
        let chat_id = chat_id.into();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Message::new(chat_id, Content::Empty).with_sender_opt(sender);
        }

        // Check if it's a command
        if trimmed.starts_with('/') || trimmed.starts_with(&self.command_prefix) {
            return self.parse_command(chat_id, trimmed, sender);
        }

        // Regular text message
        Message::new(chat_id, Content::Text(trimmed.to_string())).with_sender_opt(sender)
    }

    /// Parse a command message
    fn parse_command(&self, chat_id: String, text: &str, sender: Option<User>) -> Message {
        // Remove the command prefix (either / or custom prefix)
        let cmd_text = if text.starts_with('/') {
            &text[1..]
        } else {
            &text[self.command_prefix.len()..]
        };

        // Split command and arguments
        let mut parts = cmd_text.split_whitespace();
        let raw_name = parts.next().unwrap_or("");
        let args: Vec<String> = parts.map(|s| s.to_string()).collect();

        let name = match raw_name.split_once('@') {
            Some((name, target)) if self.is_addressed_to_us(target) => name,
            Some(_) => raw_name,
            None => raw_name,
        };

        Message::new(chat_id, Content::Command { name: name.to_lowercase(), args }).with_sender_opt(sender)
    }

    fn is_addressed_to_us(&self, target: &str) -> bool {
        match &self.bot_username {
            Some(username) => username.eq_ignore_ascii_case(target),
            None => true,
        }
    }
}
