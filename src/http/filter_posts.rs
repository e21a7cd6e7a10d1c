//! `/filter-posts/`: validation runs as a per-route filter.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::mediator::HandlerError;
use crate::posts::handlers::update_post::not_found;
use crate::posts::handlers::{CreatePost, UpdatePost};
use crate::posts::{PostId, PostStore, PostView};

use super::filter::Validated;
use super::state::AppState;

pub const PATH: &str = "/filter-posts";

#[derive(Debug, Serialize)]
pub struct CreatedPost {
    pub id: PostId,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(PATH, get(list).post(create).put(update))
        .route(&format!("{PATH}/"), get(list).post(create).put(update))
}

async fn list(State(store): State<PostStore>) -> Result<Json<Vec<PostView>>, HandlerError> {
    Ok(Json(store.list()?))
}

async fn create(
    State(store): State<PostStore>,
    Validated(request): Validated<CreatePost>,
) -> Result<Json<CreatedPost>, HandlerError> {
    let post = store.add(&request.title, &request.content)?;
    tracing::info!(id = %post.id, "post created");
    Ok(Json(CreatedPost { id: post.id }))
}

async fn update(
    State(store): State<PostStore>,
    Validated(request): Validated<UpdatePost>,
) -> Result<StatusCode, HandlerError> {
    store
        .update(request.id, &request.title, &request.content)?
        .ok_or_else(|| not_found(request.id))?;
    Ok(StatusCode::OK)
}
