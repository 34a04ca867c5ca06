/// Forum handlers - HTTP endpoints for forum post operations
use crate::error::Result;
use crate::models::VoteDirection;
use crate::services::ForumService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

pub struct ForumHandlerState {
    pub forum: Arc<ForumService>,
}

/// Request body for creating a post.
///
/// `selectedGoal` is the human-readable topic label; the wire name is the
/// one the web client already sends.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub message: String,
    #[serde(rename = "selectedGoal")]
    pub selected_goal: String,
}

/// Query parameters for listing a topic's posts.
///
/// `forumName` arrives already whitespace-stripped by the caller; the
/// service derives the same key either way.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    #[serde(rename = "forumName")]
    pub forum_name: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// Request body for voting on a post.
#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    pub direction: VoteDirection,
}

/// Create a new post
///
/// `POST /api/forums` — 201 with the created post so the client can update
/// from the mutation's own acknowledgment.
pub async fn create_post(
    state: web::Data<ForumHandlerState>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = state
        .forum
        .create_post(&req.selected_goal, &req.message)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// List a topic's posts
///
/// `GET /api/forums?forumName=...` — 200 with the posts oldest first, 404
/// when the topic has none.
pub async fn list_posts(
    state: web::Data<ForumHandlerState>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let posts = state
        .forum
        .list_posts(&query.forum_name, query.limit, query.offset)
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Vote on a post
///
/// `POST /api/forums/{post_id}/votes` — 200 with the updated post.
pub async fn cast_vote(
    state: web::Data<ForumHandlerState>,
    post_id: web::Path<Uuid>,
    req: web::Json<CastVoteRequest>,
) -> Result<HttpResponse> {
    let post = state.forum.cast_vote(*post_id, req.direction).await?;

    Ok(HttpResponse::Ok().json(post))
}
