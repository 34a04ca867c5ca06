//! Forum view synchronization model.
//!
//! `ForumViewState` is the pure state machine: the selected topic, the
//! displayed post list, and a fetch generation. Every list round-trip is
//! tagged with a token; applying a response with a superseded token is a
//! no-op, so a slow response for an earlier topic can never overwrite a
//! newer selection's list.
//!
//! `ForumView` drives the state machine against a `ForumApi`: Select is
//! fetch-then-apply, Submit is create-then-refetch as one awaited sequence.
//! The refetch is the only way a new post becomes visible; there is no
//! optimistic local insert.
use crate::api::ForumApi;
use crate::error::{ClientError, Result};
use crate::models::ForumPost;
use tracing::warn;

/// Derive a topic key from a human-readable label by removing all
/// whitespace. Must match the server's derivation so created posts are
/// retrievable under the key the lookup uses.
pub fn topic_key(label: &str) -> Option<String> {
    let key: String = label.split_whitespace().collect();
    (!key.is_empty()).then_some(key)
}

/// Token identifying one list round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// A list fetch the caller has been asked to issue.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    topic: String,
    token: FetchToken,
}

impl PendingFetch {
    /// The topic key to request posts for.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

/// State machine behind the forum view.
#[derive(Debug, Default)]
pub struct ForumViewState {
    selected: Option<String>,
    posts: Vec<ForumPost>,
    generation: u64,
}

impl ForumViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected topic key, if any.
    pub fn selected_topic(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The posts currently displayed.
    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }

    /// Select the topic derived from `label` and start a fetch for it.
    /// Returns `None` when the label strips to nothing; the selection is
    /// left unchanged in that case.
    pub fn select(&mut self, label: &str) -> Option<PendingFetch> {
        let topic = topic_key(label)?;
        self.selected = Some(topic.clone());
        self.generation += 1;
        Some(PendingFetch {
            topic,
            token: FetchToken(self.generation),
        })
    }

    /// Start the refetch that follows a submit. `None` when no topic is
    /// selected.
    pub fn begin_refresh(&mut self) -> Option<PendingFetch> {
        let topic = self.selected.clone()?;
        self.generation += 1;
        Some(PendingFetch {
            topic,
            token: FetchToken(self.generation),
        })
    }

    /// Apply a completed list response. Returns `false` and leaves the list
    /// untouched when a newer fetch or a different selection superseded the
    /// round-trip this token belongs to.
    pub fn apply_posts(&mut self, fetch: &PendingFetch, posts: Vec<ForumPost>) -> bool {
        if fetch.token != FetchToken(self.generation)
            || self.selected.as_deref() != Some(fetch.topic.as_str())
        {
            return false;
        }
        self.posts = posts;
        true
    }
}

/// Async driver pairing the state machine with an API.
pub struct ForumView<A> {
    api: A,
    state: ForumViewState,
}

impl<A: ForumApi> ForumView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ForumViewState::new(),
        }
    }

    pub fn selected_topic(&self) -> Option<&str> {
        self.state.selected_topic()
    }

    pub fn posts(&self) -> &[ForumPost] {
        self.state.posts()
    }

    /// Select a topic and load its posts.
    pub async fn select(&mut self, label: &str) -> Result<()> {
        let fetch = self.state.select(label).ok_or(ClientError::BlankTopic)?;
        let outcome = self.api.posts_by_topic(fetch.topic()).await;
        self.apply(&fetch, outcome)
    }

    /// Submit a message to the selected topic, then refetch its posts as one
    /// awaited sequence. Returns the created post from the server's own
    /// acknowledgment. Submitting with no topic selected never reaches the
    /// server.
    pub async fn submit(&mut self, message: &str) -> Result<ForumPost> {
        let topic = self
            .state
            .selected_topic()
            .ok_or(ClientError::NoTopicSelected)?
            .to_string();

        let created = self.api.create_post(message, &topic).await?;

        if let Some(fetch) = self.state.begin_refresh() {
            let outcome = self.api.posts_by_topic(fetch.topic()).await;
            self.apply(&fetch, outcome)?;
        }

        Ok(created)
    }

    fn apply(
        &mut self,
        fetch: &PendingFetch,
        outcome: Result<Vec<ForumPost>>,
    ) -> Result<()> {
        match outcome {
            Ok(posts) => {
                self.state.apply_posts(fetch, posts);
                Ok(())
            }
            // a topic nobody has posted under yet displays as empty
            Err(err) if err.is_not_found() => {
                self.state.apply_posts(fetch, Vec::new());
                Ok(())
            }
            Err(err) => {
                warn!(topic = fetch.topic(), "list fetch failed: {err}");
                Err(err)
            }
        }
    }
}
