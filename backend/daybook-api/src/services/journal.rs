/// Journal service - entry validation and listing
use crate::db::JournalStore;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::JournalEntry;
use std::sync::Arc;

pub struct JournalService {
    store: Arc<dyn JournalStore>,
}

impl JournalService {
    pub fn new(store: Arc<dyn JournalStore>) -> Self {
        Self { store }
    }

    /// Record a journal entry. The sentiment score is clamped to the 0..=100
    /// range the analytics views chart against.
    pub async fn create_entry(
        &self,
        mood: &str,
        content: &str,
        normalized_sentiment: i32,
    ) -> Result<JournalEntry> {
        if mood.trim().is_empty() {
            return Err(AppError::Validation("mood must not be empty".to_string()));
        }

        let score = normalized_sentiment.clamp(0, 100);
        let entry = self.store.create_entry(mood, content, score).await?;

        metrics::JOURNAL_ENTRIES_CREATED.inc();
        tracing::info!(entry_id = %entry.id, mood = %entry.mood, "journal entry created");

        Ok(entry)
    }

    /// All entries, oldest first. An empty journal is an empty list, not an
    /// error.
    pub async fn entries(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.store.entries().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::journal_repo::MockJournalStore;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn sentiment_is_clamped_to_chartable_range() {
        let mut store = MockJournalStore::new();
        store
            .expect_create_entry()
            .withf(|_, _, score| *score == 100)
            .once()
            .returning(|mood, content, score| {
                Ok(JournalEntry {
                    id: Uuid::new_v4(),
                    mood: mood.to_string(),
                    content: content.to_string(),
                    normalized_sentiment: score,
                    created_at: Utc::now(),
                })
            });

        let service = JournalService::new(Arc::new(store));
        let entry = service.create_entry("happy", "great day", 250).await.unwrap();
        assert_eq!(entry.normalized_sentiment, 100);
    }

    #[tokio::test]
    async fn blank_mood_is_rejected() {
        let store = MockJournalStore::new();
        let service = JournalService::new(Arc::new(store));

        let err = service.create_entry("  ", "text", 50).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_journal_lists_as_empty() {
        let mut store = MockJournalStore::new();
        store.expect_entries().returning(|| Ok(Vec::new()));

        let service = JournalService::new(Arc::new(store));
        assert!(service.entries().await.unwrap().is_empty());
    }
}
