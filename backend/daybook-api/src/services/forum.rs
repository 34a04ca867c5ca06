/// Forum service - topic key derivation, validation, and store access
use crate::db::ForumStore;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{ForumPost, Topic, VoteDirection};
use std::sync::Arc;
use uuid::Uuid;

/// Author recorded on every post until identity binding exists.
pub const ANONYMOUS_AUTHOR: &str = "anon";

pub struct ForumService {
    store: Arc<dyn ForumStore>,
}

impl ForumService {
    pub fn new(store: Arc<dyn ForumStore>) -> Self {
        Self { store }
    }

    /// Create a post under the topic derived from `label`.
    ///
    /// Resubmission creates a duplicate post; there is no deduplication.
    pub async fn create_post(&self, label: &str, message: &str) -> Result<ForumPost> {
        let topic = Topic::from_label(label)
            .ok_or_else(|| AppError::Validation("topic label must not be blank".to_string()))?;

        if message.trim().is_empty() {
            return Err(AppError::Validation("message must not be empty".to_string()));
        }

        let post = self
            .store
            .create_post(&topic, ANONYMOUS_AUTHOR, message)
            .await?;

        metrics::FORUM_POSTS_CREATED.inc();
        tracing::info!(topic = %topic, post_id = %post.id, "forum post created");

        Ok(post)
    }

    /// Posts under `label`'s topic, oldest first.
    ///
    /// A topic with no posts at all is `NotFound`; a page past the end of a
    /// non-empty topic is an empty list.
    pub async fn list_posts(&self, label: &str, limit: i64, offset: i64) -> Result<Vec<ForumPost>> {
        let topic = Topic::from_label(label)
            .ok_or_else(|| AppError::Validation("forumName must not be blank".to_string()))?;

        let posts = self.store.posts_by_topic(&topic, limit, offset).await?;

        if posts.is_empty() && self.store.count_posts(&topic).await? == 0 {
            return Err(AppError::NotFound(format!("no posts under topic {topic}")));
        }

        metrics::FORUM_LISTS_SERVED.inc();
        Ok(posts)
    }

    /// Apply one vote to a post.
    pub async fn cast_vote(&self, post_id: Uuid, direction: VoteDirection) -> Result<ForumPost> {
        match self.store.cast_vote(post_id, direction).await? {
            Some(post) => {
                metrics::FORUM_VOTES_CAST
                    .with_label_values(&[direction.as_str()])
                    .inc();
                Ok(post)
            }
            None => Err(AppError::NotFound(format!("no post with id {post_id}"))),
        }
    }
}
