/// Daybook API library
///
/// Backend service for the Daybook journaling platform: forum posts grouped
/// by goal topics, journal entries feeding the mood analytics views.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for forums and journal endpoints
/// - `models`: Persisted entities and the topic key derivation
/// - `services`: Business logic layer between handlers and storage
/// - `db`: Connection pool, migrations, and repository implementations
/// - `error`: Error types and HTTP response mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors and the `/metrics` handler
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
