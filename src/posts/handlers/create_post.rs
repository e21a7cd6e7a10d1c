//! Handler: posts.create

use serde::{Deserialize, Serialize};

use crate::mediator::{Context, HandlerError, Request};
use crate::posts::{PostStore, PostView};
use crate::validation::{RuleSet, Rules, ValidationFailure};

/// Missing or `null` fields deserialize as empty text and are reported by
/// the rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePost {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
}

impl Request for CreatePost {
    type Response = PostView;
    const NAME: &'static str = "posts.create";
}

pub struct CreatePostRules;

impl RuleSet<CreatePost> for CreatePostRules {
    fn check(&self, request: &CreatePost) -> Vec<ValidationFailure> {
        Rules::new()
            .not_empty("title", &request.title)
            .not_empty("content", &request.content)
            .finish()
    }

    fn name(&self) -> &str {
        "CreatePostRules"
    }
}

pub fn handle(request: CreatePost, ctx: &Context<PostStore>) -> Result<PostView, HandlerError> {
    if ctx.is_cancelled() {
        return Err(HandlerError::Cancelled);
    }
    let post = ctx.repo().add(&request.title, &request.content)?;
    tracing::info!(id = %post.id, "post created");
    Ok(post)
}
