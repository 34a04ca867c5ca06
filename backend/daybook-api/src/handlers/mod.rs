/// HTTP handlers for the Daybook API
///
/// - Forums: create a post, list a topic's posts, cast a vote
/// - Journal: create an entry, list all entries
pub mod forums;
pub mod journal;

pub use forums::{cast_vote, create_post, list_posts, ForumHandlerState};
pub use journal::{create_entry, list_entries, JournalHandlerState};
