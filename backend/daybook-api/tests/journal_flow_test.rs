//! HTTP-level tests: journal entries
//!
//! Create/list against an in-memory store; an empty journal is an empty
//! array, not an error.

mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::InMemoryJournalStore;
use daybook_api::handlers::{self, JournalHandlerState};
use daybook_api::services::JournalService;
use std::sync::Arc;

macro_rules! journal_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(JournalHandlerState {
                    journal: Arc::new(JournalService::new($store)),
                }))
                .service(
                    web::scope("/api/journal").service(
                        web::resource("")
                            .route(web::post().to(handlers::create_entry))
                            .route(web::get().to(handlers::list_entries)),
                    ),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn entries_round_trip_in_creation_order() {
    let app = journal_app!(Arc::new(InMemoryJournalStore::new()));

    for (mood, score) in [("anxious", 35), ("happy", 80)] {
        let req = test::TestRequest::post()
            .uri("/api/journal")
            .set_json(serde_json::json!({
                "mood": mood,
                "content": "entry body",
                "normalizedSentiment": score
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/journal").to_request();
    let entries: serde_json::Value =
        test::call_and_read_body_json(&app, req).await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["mood"], "anxious");
    assert_eq!(entries[1]["mood"], "happy");
    assert_eq!(entries[1]["normalizedSentiment"], 80);
}

#[actix_web::test]
async fn empty_journal_is_an_empty_array() {
    let app = journal_app!(Arc::new(InMemoryJournalStore::new()));

    let req = test::TestRequest::get().uri("/api/journal").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn out_of_range_sentiment_is_clamped() {
    let app = journal_app!(Arc::new(InMemoryJournalStore::new()));

    let req = test::TestRequest::post()
        .uri("/api/journal")
        .set_json(serde_json::json!({
            "mood": "elated",
            "content": "best day ever",
            "normalizedSentiment": 400
        }))
        .to_request();
    let entry: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(entry["normalizedSentiment"], 100);
}

#[actix_web::test]
async fn blank_mood_is_rejected() {
    let app = journal_app!(Arc::new(InMemoryJournalStore::new()));

    let req = test::TestRequest::post()
        .uri("/api/journal")
        .set_json(serde_json::json!({
            "mood": " ",
            "content": "text",
            "normalizedSentiment": 50
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
