use crate::models::JournalEntry;
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistence abstraction over journal entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Insert a journal entry.
    async fn create_entry(
        &self,
        mood: &str,
        content: &str,
        normalized_sentiment: i32,
    ) -> Result<JournalEntry, sqlx::Error>;

    /// All entries, oldest first.
    async fn entries(&self) -> Result<Vec<JournalEntry>, sqlx::Error>;
}

/// PostgreSQL-backed journal store.
#[derive(Clone)]
pub struct PgJournalStore {
    pool: PgPool,
}

impl PgJournalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JournalStore for PgJournalStore {
    async fn create_entry(
        &self,
        mood: &str,
        content: &str,
        normalized_sentiment: i32,
    ) -> Result<JournalEntry, sqlx::Error> {
        let entry = sqlx::query_as::<_, JournalEntry>(
            r#"
            INSERT INTO journal_entries (mood, content, normalized_sentiment)
            VALUES ($1, $2, $3)
            RETURNING id, mood, content, normalized_sentiment, created_at
            "#,
        )
        .bind(mood)
        .bind(content)
        .bind(normalized_sentiment)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn entries(&self) -> Result<Vec<JournalEntry>, sqlx::Error> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT id, mood, content, normalized_sentiment, created_at
            FROM journal_entries
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
