use async_trait::async_trait;
use chrono::NaiveDate;

use crate::application::errors::GenerationError;
use crate::domain::entities::DailyWord;

/// Source of freshly generated words, one attempt per call
#[async_trait]
pub trait WordGenerator: Send + Sync {
    async fn generate(&self) -> Result<DailyWord, GenerationError>;
}

/// Supplies the word of the day. Never fails; falls back to a static word.
#[async_trait]
pub trait WordProvider: Send + Sync {
    async fn word_of_the_day(&self, today: NaiveDate) -> DailyWord;
}
