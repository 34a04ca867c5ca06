//! Shared test doubles for the HTTP-level tests.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use daybook_api::db::{ForumStore, JournalStore};
use daybook_api::models::{ForumPost, JournalEntry, Topic, VoteDirection};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// In-memory forum store with a deterministic clock, so creation order is
/// observable through timestamps the way it is against the real schema.
pub struct InMemoryForumStore {
    posts: Mutex<Vec<ForumPost>>,
    clock: AtomicI64,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            clock: AtomicI64::new(0),
        }
    }

    fn next_timestamp(&self) -> DateTime<Utc> {
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        base_time() + Duration::seconds(tick)
    }
}

#[async_trait]
impl ForumStore for InMemoryForumStore {
    async fn create_post(
        &self,
        topic: &Topic,
        author: &str,
        message: &str,
    ) -> Result<ForumPost, sqlx::Error> {
        let post = ForumPost {
            id: Uuid::new_v4(),
            forum_name: topic.as_str().to_string(),
            author: author.to_string(),
            message: message.to_string(),
            up_votes: 0,
            down_votes: 0,
            created_at: self.next_timestamp(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn posts_by_topic(
        &self,
        topic: &Topic,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ForumPost>, sqlx::Error> {
        let mut posts: Vec<ForumPost> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.forum_name == topic.as_str())
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(posts
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count_posts(&self, topic: &Topic) -> Result<i64, sqlx::Error> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.forum_name == topic.as_str())
            .count() as i64)
    }

    async fn cast_vote(
        &self,
        post_id: Uuid,
        direction: VoteDirection,
    ) -> Result<Option<ForumPost>, sqlx::Error> {
        let mut posts = self.posts.lock().unwrap();
        let Some(post) = posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(None);
        };
        match direction {
            VoteDirection::Up => post.up_votes += 1,
            VoteDirection::Down => post.down_votes += 1,
        }
        Ok(Some(post.clone()))
    }
}

/// Forum store whose every operation fails, for exercising the 500 path.
pub struct FailingForumStore;

#[async_trait]
impl ForumStore for FailingForumStore {
    async fn create_post(
        &self,
        _topic: &Topic,
        _author: &str,
        _message: &str,
    ) -> Result<ForumPost, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn posts_by_topic(
        &self,
        _topic: &Topic,
        _limit: i64,
        _offset: i64,
    ) -> Result<Vec<ForumPost>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn count_posts(&self, _topic: &Topic) -> Result<i64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn cast_vote(
        &self,
        _post_id: Uuid,
        _direction: VoteDirection,
    ) -> Result<Option<ForumPost>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// In-memory journal store with the same deterministic clock.
pub struct InMemoryJournalStore {
    entries: Mutex<Vec<JournalEntry>>,
    clock: AtomicI64,
}

impl InMemoryJournalStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            clock: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl JournalStore for InMemoryJournalStore {
    async fn create_entry(
        &self,
        mood: &str,
        content: &str,
        normalized_sentiment: i32,
    ) -> Result<JournalEntry, sqlx::Error> {
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            mood: mood.to_string(),
            content: content.to_string(),
            normalized_sentiment,
            created_at: base_time() + Duration::seconds(tick),
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn entries(&self) -> Result<Vec<JournalEntry>, sqlx::Error> {
        let mut entries = self.entries.lock().unwrap().clone();
        entries.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(entries)
    }
}
