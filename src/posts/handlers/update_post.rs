//! Handler: posts.update
//!
//! Validation runs before the lookup: a nil id is a validation failure, an
//! unknown id is `NotFound`.

use serde::{Deserialize, Serialize};

use crate::mediator::{Context, HandlerError, Request};
use crate::posts::{PostId, PostStore, PostView};
use crate::validation::{RuleSet, Rules, ValidationFailure};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePost {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: PostId,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
}

impl Request for UpdatePost {
    type Response = PostView;
    const NAME: &'static str = "posts.update";
}

pub struct UpdatePostRules;

impl RuleSet<UpdatePost> for UpdatePostRules {
    fn check(&self, request: &UpdatePost) -> Vec<ValidationFailure> {
        Rules::new()
            .not_default("id", &request.id)
            .not_empty("title", &request.title)
            .not_empty("content", &request.content)
            .finish()
    }

    fn name(&self) -> &str {
        "UpdatePostRules"
    }
}

pub fn handle(request: UpdatePost, ctx: &Context<PostStore>) -> Result<PostView, HandlerError> {
    if ctx.is_cancelled() {
        return Err(HandlerError::Cancelled);
    }
    ctx.repo()
        .update(request.id, &request.title, &request.content)?
        .ok_or_else(|| not_found(request.id))
}

pub(crate) fn not_found(id: PostId) -> HandlerError {
    HandlerError::NotFound(format!("Post with id '{id}' was not found."))
}
