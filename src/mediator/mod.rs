//! mediator: request dispatch with a validation pipeline stage.
//!
//! Build the pipeline by registering one handler per request type on a
//! `Mediator`. Every `send` runs the `ValidationBehavior` first, using the
//! rule sets registered for the exact request type, and only then calls the
//! handler. Nothing here knows about HTTP.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use posts_pipeline::mediator::Mediator;
//! use posts_pipeline::validation::{ValidationExecutor, ValidatorRegistry};
//!
//! let executor = ValidationExecutor::new(Arc::new(posts::validators()));
//! let mediator = posts_pipeline::register_handlers!(
//!     Mediator::new(PostStore::seeded(), executor),
//!     posts::handlers::create_post,
//!     posts::handlers::update_post,
//!     posts::handlers::list_posts,
//! );
//!
//! let created = mediator.send(CreatePost { .. }, &cancel).await?;
//! ```
//!
//! ## Handler Convention
//!
//! Each handler file defines its request type, the request's rule set and a
//! `handle` function:
//!
//! ```ignore
//! // src/posts/handlers/create_post.rs
//!
//! pub struct CreatePost { pub title: String, pub content: String }
//!
//! impl Request for CreatePost {
//!     type Response = PostView;
//!     const NAME: &'static str = "posts.create";
//! }
//!
//! pub struct CreatePostRules;
//! impl RuleSet<CreatePost> for CreatePostRules { /* ... */ }
//!
//! pub fn handle(request: CreatePost, ctx: &Context<PostStore>) -> Result<PostView, HandlerError> {
//!     Ok(ctx.repo().add(&request.title, &request.content)?)
//! }
//! ```

mod behavior;
mod context;
mod error;
#[allow(clippy::module_inception)]
mod mediator;
mod request;

pub use behavior::ValidationBehavior;
pub use context::Context;
pub use error::HandlerError;
pub use mediator::Mediator;
pub use request::Request;

/// Register handler modules with a mediator using the convention pattern.
///
/// Each handler module must export `handle(request, ctx)`; the request type
/// is taken from its signature.
///
/// # Example
/// ```ignore
/// let mediator = posts_pipeline::register_handlers!(
///     Mediator::new(PostStore::seeded(), executor),
///     handlers::create_post,
///     handlers::update_post,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($mediator:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $mediator
        $(
            .handler($($seg)::+::handle)
        )+
    };
}
