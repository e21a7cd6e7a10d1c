//! Context passed to request handlers.
//!
//! Carries the request name, the request's cancellation token and a
//! reference to the repository. Handlers access everything they need through
//! the context.

use tokio_util::sync::CancellationToken;

/// The context passed to every request handler.
///
/// Generic over `R` (the repository type) so handlers can access
/// whatever repository the mediator is configured with.
///
/// ## Example
///
/// ```ignore
/// pub fn handle(request: CreatePost, ctx: &Context<PostStore>) -> Result<PostView, HandlerError> {
///     Ok(ctx.repo().add(&request.title, &request.content)?)
/// }
/// ```
pub struct Context<'a, R> {
    request_name: &'static str,
    cancel: &'a CancellationToken,
    repo: &'a R,
}

impl<'a, R> Context<'a, R> {
    pub(crate) fn new(request_name: &'static str, cancel: &'a CancellationToken, repo: &'a R) -> Self {
        Self {
            request_name,
            cancel,
            repo,
        }
    }

    /// Get the name of the request being handled.
    pub fn request_name(&self) -> &'static str {
        self.request_name
    }

    /// The caller went away; handlers check this before mutating state.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Get a reference to the repository.
    pub fn repo(&self) -> &R {
        self.repo
    }
}
