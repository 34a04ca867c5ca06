//! Client library for the Daybook API
//!
//! Typed HTTP bindings, the forum view synchronization model, and the mood
//! analytics transforms the charts are fed from.
//!
//! # Modules
//!
//! - `api`: reqwest-based bindings and the `ForumApi` seam
//! - `view`: forum view state machine and its async driver
//! - `analytics`: pure transforms over journal entries
//! - `models`: wire types
//! - `error`: client error taxonomy
pub mod analytics;
pub mod api;
pub mod error;
pub mod models;
pub mod view;

pub use api::{DaybookClient, ForumApi};
pub use error::{ClientError, Result};
pub use view::{ForumView, ForumViewState};
