use crate::models::{ForumPost, Topic, VoteDirection};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Persistence abstraction over the forum post collection.
///
/// Posts are keyed by their topic; membership is set at creation and never
/// changes. Listing is explicitly ordered by creation time (id as
/// tie-break), never store-native order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForumStore: Send + Sync {
    /// Insert a post under `topic` with zero vote counters.
    async fn create_post(
        &self,
        topic: &Topic,
        author: &str,
        message: &str,
    ) -> Result<ForumPost, sqlx::Error>;

    /// Posts whose key exactly matches `topic`, oldest first.
    async fn posts_by_topic(
        &self,
        topic: &Topic,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ForumPost>, sqlx::Error>;

    /// Total number of posts under `topic`.
    async fn count_posts(&self, topic: &Topic) -> Result<i64, sqlx::Error>;

    /// Apply one vote to a post. Returns the updated post, `None` for an
    /// unknown id.
    async fn cast_vote(
        &self,
        post_id: Uuid,
        direction: VoteDirection,
    ) -> Result<Option<ForumPost>, sqlx::Error>;
}

/// PostgreSQL-backed forum store.
#[derive(Clone)]
pub struct PgForumStore {
    pool: PgPool,
}

impl PgForumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumStore for PgForumStore {
    async fn create_post(
        &self,
        topic: &Topic,
        author: &str,
        message: &str,
    ) -> Result<ForumPost, sqlx::Error> {
        let post = sqlx::query_as::<_, ForumPost>(
            r#"
            INSERT INTO forum_posts (forum_name, author, message, up_votes, down_votes)
            VALUES ($1, $2, $3, 0, 0)
            RETURNING id, forum_name, author, message, up_votes, down_votes, created_at
            "#,
        )
        .bind(topic.as_str())
        .bind(author)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn posts_by_topic(
        &self,
        topic: &Topic,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ForumPost>, sqlx::Error> {
        let posts = sqlx::query_as::<_, ForumPost>(
            r#"
            SELECT id, forum_name, author, message, up_votes, down_votes, created_at
            FROM forum_posts
            WHERE forum_name = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(topic.as_str())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn count_posts(&self, topic: &Topic) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM forum_posts WHERE forum_name = $1
            "#,
        )
        .bind(topic.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn cast_vote(
        &self,
        post_id: Uuid,
        direction: VoteDirection,
    ) -> Result<Option<ForumPost>, sqlx::Error> {
        let post = sqlx::query_as::<_, ForumPost>(
            r#"
            UPDATE forum_posts
            SET up_votes = up_votes + CASE WHEN $2 = 'up' THEN 1 ELSE 0 END,
                down_votes = down_votes + CASE WHEN $2 = 'down' THEN 1 ELSE 0 END
            WHERE id = $1
            RETURNING id, forum_name, author, message, up_votes, down_votes, created_at
            "#,
        )
        .bind(post_id)
        .bind(direction.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
