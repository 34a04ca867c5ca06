/// Journal handlers - HTTP endpoints for journal entry operations
use crate::error::Result;
use crate::services::JournalService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

pub struct JournalHandlerState {
    pub journal: Arc<JournalService>,
}

/// Request body for creating a journal entry.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub mood: String,
    pub content: String,
    #[serde(rename = "normalizedSentiment")]
    pub normalized_sentiment: i32,
}

/// Create a journal entry
///
/// `POST /api/journal` — 201 with the created entry.
pub async fn create_entry(
    state: web::Data<JournalHandlerState>,
    req: web::Json<CreateEntryRequest>,
) -> Result<HttpResponse> {
    let entry = state
        .journal
        .create_entry(&req.mood, &req.content, req.normalized_sentiment)
        .await?;

    Ok(HttpResponse::Created().json(entry))
}

/// List journal entries
///
/// `GET /api/journal` — 200 with all entries oldest first; an empty journal
/// is an empty array.
pub async fn list_entries(state: web::Data<JournalHandlerState>) -> Result<HttpResponse> {
    let entries = state.journal.entries().await?;

    Ok(HttpResponse::Ok().json(entries))
}
