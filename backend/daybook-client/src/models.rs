//! Wire types for the Daybook API.
//!
//! Field names follow the JSON contract the server speaks (`forumName`,
//! `user`, `upVote`, `downVote`, `createdAt`, `normalizedSentiment`).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user-submitted message within a forum topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: Uuid,
    #[serde(rename = "forumName")]
    pub forum_name: String,
    #[serde(rename = "user")]
    pub author: String,
    pub message: String,
    #[serde(rename = "upVote")]
    pub up_votes: i32,
    #[serde(rename = "downVote")]
    pub down_votes: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// One mood journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub mood: String,
    pub content: String,
    #[serde(rename = "normalizedSentiment")]
    pub normalized_sentiment: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Direction of a forum post vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}
