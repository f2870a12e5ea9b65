//! Word-of-the-day providers

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::domain::entities::DailyWord;
use crate::domain::traits::{WordGenerator, WordProvider};

/// Single cache slot, valid for one calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCache {
    pub date: NaiveDate,
    pub word: DailyWord,
}

/// Caches one generated word per day, falling back to a static word on failure.
///
/// A failed generation leaves the cache untouched so the next call retries.
pub struct CachedWordProvider<G: WordGenerator> {
    generator: G,
    cache: Mutex<Option<WordCache>>,
}

impl<G: WordGenerator> CachedWordProvider<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            cache: Mutex::new(None),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Current cache slot, whatever its date
    pub async fn cached(&self) -> Option<WordCache> {
        self.cache.lock().await.clone()
    }
}

#[async_trait]
impl<G: WordGenerator> WordProvider for CachedWordProvider<G> {
    async fn word_of_the_day(&self, today: NaiveDate) -> DailyWord {
        // Held across generation so concurrent callers share one request
        let mut cache = self.cache.lock().await;

        if let Some(entry) = cache.as_ref().filter(|c| c.date == today) {
            return entry.word.clone();
        }

        match self.generator.generate().await {
            Ok(word) => {
                tracing::info!("Generated word of the day for {}", today);
                *cache = Some(WordCache {
                    date: today,
                    word: word.clone(),
                });
                word
            }
            Err(e) => {
                tracing::warn!("Word generation failed, using fallback: {}", e);
                DailyWord::fallback()
            }
        }
    }
}

/// Always returns the same word. For practice games and tests.
pub struct StaticWordProvider {
    word: DailyWord,
    calls: AtomicUsize,
}

impl StaticWordProvider {
    pub fn new(word: DailyWord) -> Self {
        Self {
            word,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the word was requested
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordProvider for StaticWordProvider {
    async fn word_of_the_day(&self, _today: NaiveDate) -> DailyWord {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.word.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::GenerationError;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    /// Replays scripted results, one per call
    struct ScriptedGenerator {
        results: StdMutex<VecDeque<Result<DailyWord, GenerationError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        fn new(results: Vec<Result<DailyWord, GenerationError>>) -> Self {
            Self {
                results: StdMutex::new(results.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WordGenerator for ScriptedGenerator {
        async fn generate(&self) -> Result<DailyWord, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::Request("script exhausted".to_string())))
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn yield_word() -> DailyWord {
        DailyWord::new("YIELD", "Income earned on an investment.")
    }

    #[tokio::test]
    async fn test_same_day_is_cached() {
        let provider = CachedWordProvider::new(ScriptedGenerator::new(vec![Ok(yield_word())]));

        let first = provider.word_of_the_day(day(1)).await;
        let second = provider.word_of_the_day(day(1)).await;

        assert_eq!(first, yield_word());
        assert_eq!(first, second);
        assert_eq!(provider.generator().calls(), 1);
        assert_eq!(provider.cached().await.map(|c| c.date), Some(day(1)));
    }

    #[tokio::test]
    async fn test_failure_returns_fallback_without_caching() {
        let provider = CachedWordProvider::new(ScriptedGenerator::new(vec![
            Err(GenerationError::MissingApiKey),
            Ok(yield_word()),
        ]));

        let first = provider.word_of_the_day(day(1)).await;
        assert!(first.is_fallback());
        assert_eq!(provider.cached().await, None);

        // Next call retries the generator
        let second = provider.word_of_the_day(day(1)).await;
        assert_eq!(second, yield_word());
        assert_eq!(provider.generator().calls(), 2);
    }

    #[tokio::test]
    async fn test_new_day_regenerates() {
        let price = DailyWord::new("PRICE", "What something costs.");
        let provider = CachedWordProvider::new(ScriptedGenerator::new(vec![Ok(yield_word()), Ok(price.clone())]));

        assert_eq!(provider.word_of_the_day(day(1)).await, yield_word());
        assert_eq!(provider.word_of_the_day(day(2)).await, price);
        assert_eq!(provider.cached().await.map(|c| c.word), Some(price));
        assert_eq!(provider.generator().calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_on_new_day_keeps_old_slot() {
        let provider = CachedWordProvider::new(ScriptedGenerator::new(vec![Ok(yield_word())]));

        provider.word_of_the_day(day(1)).await;
        let next = provider.word_of_the_day(day(2)).await;

        assert!(next.is_fallback());
        assert_eq!(provider.cached().await.map(|c| c.date), Some(day(1)));
    }

    #[tokio::test]
    async fn test_static_provider_counts_calls() {
        let provider = StaticWordProvider::new(yield_word());
        assert_eq!(provider.word_of_the_day(day(1)).await, yield_word());
        assert_eq!(provider.word_of_the_day(day(9)).await, yield_word());
        assert_eq!(provider.calls(), 2);
    }
}
