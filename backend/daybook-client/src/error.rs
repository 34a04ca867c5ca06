//! Error types for the Daybook client.
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error taxonomy.
///
/// Callers can branch on outcome instead of reading a console log: transport
/// failures, API rejections (with the server's status), and local state
/// errors are distinct variants.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decoding failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Submit was attempted with no topic selected
    #[error("no topic selected")]
    NoTopicSelected,

    /// A topic label stripped to the empty string
    #[error("topic label is blank")]
    BlankTopic,
}

impl ClientError {
    /// True when the server said the topic has no posts yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}
