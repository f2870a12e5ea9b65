use serde::{Deserialize, Serialize};

/// Number of letters in every target word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

pub const FALLBACK_WORD: &str = "ASSET";
pub const FALLBACK_DEFINITION: &str =
    "Any item of economic value owned by an individual or corporation.";

/// The word of the day together with its clue text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWord {
    pub word: String,
    pub definition: String,
    pub hint: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

impl DailyWord {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into().to_uppercase(),
            definition: definition.into(),
            hint: None,
            difficulty: None,
            category: None,
        }
    }

    /// Static word used whenever generation fails
    pub fn fallback() -> Self {
        Self::new(FALLBACK_WORD, FALLBACK_DEFINITION)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_fallback(&self) -> bool {
        self.word == FALLBACK_WORD && self.definition == FALLBACK_DEFINITION
    }
}

/// True for exactly [`WORD_LENGTH`] ASCII letters
pub fn is_valid_word(word: &str) -> bool {
    word.chars().count() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}
