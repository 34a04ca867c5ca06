//! Prometheus metrics for daybook-api.
//!
//! Exposes forum and journal collectors and an HTTP handler for the
//! `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Forum posts created.
    pub static ref FORUM_POSTS_CREATED: IntCounter = register_int_counter!(
        "daybook_forum_posts_created_total",
        "Total forum posts created"
    )
    .expect("failed to register daybook_forum_posts_created_total");

    /// Topic listings served (successful List responses).
    pub static ref FORUM_LISTS_SERVED: IntCounter = register_int_counter!(
        "daybook_forum_lists_served_total",
        "Total topic listings served"
    )
    .expect("failed to register daybook_forum_lists_served_total");

    /// Votes cast, segmented by direction.
    pub static ref FORUM_VOTES_CAST: IntCounterVec = register_int_counter_vec!(
        "daybook_forum_votes_cast_total",
        "Total votes cast segmented by direction",
        &["direction"]
    )
    .expect("failed to register daybook_forum_votes_cast_total");

    /// Journal entries created.
    pub static ref JOURNAL_ENTRIES_CREATED: IntCounter = register_int_counter!(
        "daybook_journal_entries_created_total",
        "Total journal entries created"
    )
    .expect("failed to register daybook_journal_entries_created_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
