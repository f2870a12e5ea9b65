//! Replies produced by the game state machine

use std::fmt;

use crate::domain::entities::{GameCommand, Pattern, MAX_ATTEMPTS, WORD_LENGTH};

/// What the bot answers after handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Welcome,
    Help,
    GameStarted {
        category: Option<String>,
        difficulty: Option<String>,
    },
    AlreadyPlayed,
    NoActiveGame,
    InvalidLength {
        length: usize,
    },
    Progress {
        pattern: Pattern,
        attempt: usize,
    },
    Won {
        pattern: Pattern,
        attempts: usize,
        word: String,
    },
    Lost {
        pattern: Pattern,
        word: String,
        definition: String,
    },
    Definition {
        definition: String,
        hint: Option<String>,
    },
    DefinitionLocked,
    UnknownCommand(String),
    Failure,
}

impl Reply {
    /// Whether this reply ends a game
    pub fn is_terminal(&self) -> bool {
        matches!(self, Reply::Won { .. } | Reply::Lost { .. })
    }
}

fn help_text() -> String {
    let mut help = String::from("How to play:\n");
    help.push_str(&format!(
        "Guess the {}-letter word of the day in {} tries. After each guess:\n",
        WORD_LENGTH, MAX_ATTEMPTS
    ));
    help.push_str("🟩 right letter, right spot\n🟨 letter is in the word, wrong spot\n⬛ letter is not in the word\n\n");
    help.push_str("Commands:\n");
    for cmd in GameCommand::ALL {
        help.push_str(&format!("/{} - {}\n", cmd.name(), cmd.description()));
    }
    help
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Welcome => write!(
                f,
                "Welcome to Word of the Day! 📚\n\nEvery day there is one new {}-letter word to find. \
                 Send /play to start, or /help to learn the rules.",
                WORD_LENGTH
            ),
            Reply::Help => write!(f, "{}", help_text()),
            Reply::GameStarted { category, difficulty } => {
                write!(
                    f,
                    "🎯 New game started! Guess the {}-letter word. You have {} attempts.",
                    WORD_LENGTH, MAX_ATTEMPTS
                )?;
                if let Some(category) = category {
                    write!(f, "\nCategory: {}", category)?;
                }
                if let Some(difficulty) = difficulty {
                    write!(f, "\nDifficulty: {}", difficulty)?;
                }
                write!(f, "\nAfter your first guess you can ask for a hint with /definition.")
            }
            Reply::AlreadyPlayed => write!(
                f,
                "You've already played today! Come back tomorrow for a new word. ⏳"
            ),
            Reply::NoActiveGame => write!(f, "No game in progress. Send /play to start one."),
            Reply::InvalidLength { length } => write!(
                f,
                "Your guess must be exactly {} letters (got {}).",
                WORD_LENGTH, length
            ),
            Reply::Progress { pattern, attempt } => write!(
                f,
                "{}\n\nAttempt {}/{}",
                pattern.emoji_with_letters(),
                attempt,
                MAX_ATTEMPTS
            ),
            Reply::Won { pattern, attempts, word } => write!(
                f,
                "{}\n\n🎉 Correct! The word was {}. You got it in {}/{} attempts.",
                pattern.emoji_with_letters(),
                word,
                attempts,
                MAX_ATTEMPTS
            ),
            Reply::Lost { pattern, word, definition } => write!(
                f,
                "{}\n\n😔 Out of attempts! The word was {}.\n{}",
                pattern.emoji_with_letters(),
                word,
                definition
            ),
            Reply::Definition { definition, hint } => {
                write!(f, "📖 Definition: {}", definition)?;
                if let Some(hint) = hint {
                    write!(f, "\n💡 Hint: {}", hint)?;
                }
                Ok(())
            }
            Reply::DefinitionLocked => write!(
                f,
                "Make at least one guess before asking for the definition."
            ),
            Reply::UnknownCommand(name) => write!(f, "Unknown command: /{}. Try /help.", name),
            Reply::Failure => write!(f, "Something went wrong. Please try /play again later."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::evaluate;

    #[test]
    fn test_help_lists_every_command() {
        let help = Reply::Help.to_string();
        for cmd in GameCommand::ALL {
            assert!(help.contains(&format!("/{}", cmd.name())), "missing /{}", cmd.name());
        }
    }

    #[test]
    fn test_game_started_mentions_tags() {
        let reply = Reply::GameStarted {
            category: Some("Finance".to_string()),
            difficulty: None,
        };
        let text = reply.to_string();
        assert!(text.contains("Category: Finance"));
        assert!(!text.contains("Difficulty"));
    }

    #[test]
    fn test_lost_reveals_word() {
        let reply = Reply::Lost {
            pattern: evaluate("BONDS", "ASSET").unwrap(),
            word: "ASSET".to_string(),
            definition: "Something of value.".to_string(),
        };
        assert!(reply.is_terminal());
        assert!(reply.to_string().contains("The word was ASSET"));
    }

    #[test]
    fn test_progress_shows_attempt() {
        let reply = Reply::Progress {
            pattern: evaluate("BONDS", "ASSET").unwrap(),
            attempt: 2,
        };
        assert!(!reply.is_terminal());
        assert!(reply.to_string().ends_with("Attempt 2/6"));
    }
}
