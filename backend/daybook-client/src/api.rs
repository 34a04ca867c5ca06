//! HTTP bindings for the Daybook API.
//!
//! `DaybookClient` wraps a `reqwest::Client` with a base URL; the forum
//! operations sit behind the `ForumApi` trait so the view model can be
//! exercised without a server.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::models::{ForumPost, JournalEntry, VoteDirection};

/// Forum operations the view model drives.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForumApi: Send + Sync {
    /// Submit a post under the topic derived from `topic_label`.
    /// The server answers with the created post.
    async fn create_post(&self, message: &str, topic_label: &str) -> Result<ForumPost>;

    /// Posts under an already whitespace-stripped topic key, oldest first.
    /// A topic with no posts is `ClientError::Api { status: 404, .. }`.
    async fn posts_by_topic(&self, topic: &str) -> Result<Vec<ForumPost>>;

    /// Apply one vote to a post.
    async fn cast_vote(&self, post_id: Uuid, direction: VoteDirection) -> Result<ForumPost>;
}

/// Client for one Daybook API endpoint.
pub struct DaybookClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct CreatePostBody<'a> {
    message: &'a str,
    #[serde(rename = "selectedGoal")]
    selected_goal: &'a str,
}

#[derive(Serialize)]
struct CastVoteBody {
    direction: VoteDirection,
}

#[derive(Serialize)]
struct CreateEntryBody<'a> {
    mood: &'a str,
    content: &'a str,
    #[serde(rename = "normalizedSentiment")]
    normalized_sentiment: i32,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl DaybookClient {
    /// Create a new client against `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn decode_error(resp: reqwest::Response) -> ClientError {
        let status = resp.status().as_u16();
        let message = match resp.json::<ApiErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => "unreadable error body".to_string(),
        };
        ClientError::Api { status, message }
    }

    /// Record a journal entry.
    pub async fn create_journal_entry(
        &self,
        mood: &str,
        content: &str,
        normalized_sentiment: i32,
    ) -> Result<JournalEntry> {
        let url = format!("{}/api/journal", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&CreateEntryBody {
                mood,
                content,
                normalized_sentiment,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }
        Ok(resp.json::<JournalEntry>().await?)
    }

    /// All journal entries, oldest first.
    pub async fn journal_entries(&self) -> Result<Vec<JournalEntry>> {
        let url = format!("{}/api/journal", self.base_url);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }
        Ok(resp.json::<Vec<JournalEntry>>().await?)
    }
}

#[async_trait]
impl ForumApi for DaybookClient {
    async fn create_post(&self, message: &str, topic_label: &str) -> Result<ForumPost> {
        let url = format!("{}/api/forums", self.base_url);
        debug!(topic = topic_label, "submitting forum post");

        let resp = self
            .client
            .post(&url)
            .json(&CreatePostBody {
                message,
                selected_goal: topic_label,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }
        Ok(resp.json::<ForumPost>().await?)
    }

    async fn posts_by_topic(&self, topic: &str) -> Result<Vec<ForumPost>> {
        let url = format!("{}/api/forums", self.base_url);
        debug!(topic, "fetching topic posts");

        let resp = self
            .client
            .get(&url)
            .query(&[("forumName", topic)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }
        Ok(resp.json::<Vec<ForumPost>>().await?)
    }

    async fn cast_vote(&self, post_id: Uuid, direction: VoteDirection) -> Result<ForumPost> {
        let url = format!("{}/api/forums/{}/votes", self.base_url, post_id);

        let resp = self
            .client
            .post(&url)
            .json(&CastVoteBody { direction })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }
        Ok(resp.json::<ForumPost>().await?)
    }
}
