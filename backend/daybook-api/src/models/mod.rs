/// Data models for the Daybook API
///
/// This module defines structures for:
/// - ForumPost: user-submitted messages grouped by goal topic
/// - JournalEntry: mood journal entries feeding the analytics views
/// - Topic: the whitespace-stripped topic key (see `topic`)
pub mod topic;

pub use topic::Topic;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single user-submitted message within a forum topic.
///
/// JSON field names preserve the contract the web client already speaks
/// (`forumName`, `user`, `upVote`, `downVote`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
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
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
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

impl VoteDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "up",
            VoteDirection::Down => "down",
        }
    }
}
