//! Mediator: typed request handler registry and dispatch.
//!
//! `Mediator<R>` holds a repository, a validation stage and one handler per
//! request type. Each handler receives the request and a `Context<R>` and
//! returns `Result<Q::Response, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use posts_pipeline::mediator::Mediator;
//!
//! let mediator = Mediator::new(PostStore::seeded(), executor)
//!     .handler(|request: CreatePost, ctx| Ok(ctx.repo().add(&request.title, &request.content)?));
//!
//! let post = mediator.send(CreatePost { .. }, &CancellationToken::new()).await?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;

use tokio_util::sync::CancellationToken;

use crate::validation::ValidationExecutor;

use super::behavior::ValidationBehavior;
use super::context::Context;
use super::error::HandlerError;
use super::request::Request;

type HandlerFn<Q, R> = Box<
    dyn Fn(Q, &Context<'_, R>) -> Result<<Q as Request>::Response, HandlerError> + Send + Sync,
>;

/// A registered handler, type-erased so handlers for different request
/// types share one map.
struct RegisteredHandler {
    name: &'static str,
    handle: Box<dyn Any + Send + Sync>,
}

/// Routes typed requests through the validation stage to their handlers.
///
/// Generic over `R`, the repository type. Handlers receive a `Context<R>`
/// and can access the repo via `ctx.repo()`.
pub struct Mediator<R> {
    repo: R,
    behavior: ValidationBehavior,
    handlers: HashMap<TypeId, RegisteredHandler>,
}

impl<R: Send + Sync + 'static> Mediator<R> {
    /// Create a mediator whose pipeline validates with `executor`.
    pub fn new(repo: R, executor: ValidationExecutor) -> Self {
        Self {
            repo,
            behavior: ValidationBehavior::new(executor),
            handlers: HashMap::new(),
        }
    }

    /// Register the handler for request type `Q`.
    ///
    /// Uses builder pattern: returns `self` for chaining. Registering a
    /// second handler for the same request type replaces the first.
    pub fn handler<Q, F>(mut self, handler: F) -> Self
    where
        Q: Request,
        F: Fn(Q, &Context<'_, R>) -> Result<Q::Response, HandlerError> + Send + Sync + 'static,
    {
        let handle: HandlerFn<Q, R> = Box::new(handler);
        self.handlers.insert(
            TypeId::of::<Q>(),
            RegisteredHandler {
                name: Q::NAME,
                handle: Box::new(handle),
            },
        );
        self
    }

    /// Send a request through the pipeline.
    ///
    /// Looks up the handler, runs the validation stage, then calls the
    /// handler. Validation failures and cancellation are returned as errors
    /// without calling the handler.
    pub async fn send<Q: Request>(
        &self,
        request: Q,
        cancel: &CancellationToken,
    ) -> Result<Q::Response, HandlerError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<Q>())
            .and_then(|registered| registered.handle.downcast_ref::<HandlerFn<Q, R>>())
            .ok_or(HandlerError::UnknownRequest(Q::NAME))?;

        tracing::debug!(request = Q::NAME, "dispatching request");

        let ctx = Context::new(Q::NAME, cancel, &self.repo);
        self.behavior
            .handle(request, cancel, |request| handler(request, &ctx))
            .await
    }

    /// List registered request names.
    pub fn requests(&self) -> Vec<&'static str> {
        self.handlers.values().map(|registered| registered.name).collect()
    }

    /// Get a reference to the repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
