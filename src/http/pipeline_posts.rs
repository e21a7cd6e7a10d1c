//! `/pipeline-behavior-posts/`: every request goes through the mediator,
//! whose validation stage runs before the handler.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::mediator::{HandlerError, Mediator};
use crate::posts::handlers::{CreatePost, ListPosts, UpdatePost};
use crate::posts::{PostStore, PostView};

use super::boundary::RequestContext;
use super::filter::Payload;
use super::state::AppState;

pub const PATH: &str = "/pipeline-behavior-posts";

type Posts = Arc<Mediator<PostStore>>;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(PATH, get(list).post(create).put(update))
        .route(&format!("{PATH}/"), get(list).post(create).put(update))
}

async fn list(
    State(mediator): State<Posts>,
    context: RequestContext,
) -> Result<Json<Vec<PostView>>, HandlerError> {
    let posts = mediator.send(ListPosts, context.cancellation()).await?;
    Ok(Json(posts))
}

async fn create(
    State(mediator): State<Posts>,
    context: RequestContext,
    Payload(request): Payload<CreatePost>,
) -> Result<Json<PostView>, HandlerError> {
    let post = mediator.send(request, context.cancellation()).await?;
    Ok(Json(post))
}

async fn update(
    State(mediator): State<Posts>,
    context: RequestContext,
    Payload(request): Payload<UpdatePost>,
) -> Result<Json<PostView>, HandlerError> {
    let post = mediator.send(request, context.cancellation()).await?;
    Ok(Json(post))
}
