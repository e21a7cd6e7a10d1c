//! Handler: posts.list
//!
//! No rule sets are registered for this request; it always passes validation.

use serde::{Deserialize, Serialize};

use crate::mediator::{Context, HandlerError, Request};
use crate::posts::{PostStore, PostView};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListPosts;

impl Request for ListPosts {
    type Response = Vec<PostView>;
    const NAME: &'static str = "posts.list";
}

pub fn handle(_request: ListPosts, ctx: &Context<PostStore>) -> Result<Vec<PostView>, HandlerError> {
    Ok(ctx.repo().list()?)
}
