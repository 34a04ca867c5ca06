/// Database access layer
///
/// Connection pooling, migrations, and the repository implementations for
/// forum posts and journal entries.
pub mod forum_repo;
pub mod journal_repo;

pub use forum_repo::{ForumStore, PgForumStore};
pub use journal_repo::{JournalStore, PgJournalStore};

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Create the PostgreSQL connection pool.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&cfg.url)
        .await
}

/// Run pending migrations from `./migrations`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
