/// Business logic layer for the Daybook API
///
/// - Forum service: topic derivation, validation, post creation/listing/votes
/// - Journal service: entry validation and listing
pub mod forum;
pub mod journal;

pub use forum::{ForumService, ANONYMOUS_AUTHOR};
pub use journal::JournalService;
