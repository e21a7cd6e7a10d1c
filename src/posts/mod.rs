//! posts: the post resource: model, store, handlers and their rule sets.

pub mod handlers;
mod post;
mod store;

pub use post::{Post, PostId, PostView};
pub use store::PostStore;

use crate::mediator::Mediator;
use crate::validation::{ValidationExecutor, ValidatorRegistry};

use handlers::{CreatePost, CreatePostRules, UpdatePost, UpdatePostRules};

/// Rule sets for every post request type.
pub fn validators() -> ValidatorRegistry {
    ValidatorRegistry::new()
        .register::<CreatePost, _>(CreatePostRules)
        .register::<UpdatePost, _>(UpdatePostRules)
}

/// A mediator with every post handler registered.
pub fn mediator(store: PostStore, executor: ValidationExecutor) -> Mediator<PostStore> {
    crate::register_handlers!(
        Mediator::new(store, executor),
        handlers::create_post,
        handlers::update_post,
        handlers::list_posts,
    )
}
