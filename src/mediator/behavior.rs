//! ValidationBehavior: the validation stage of the mediator pipeline.
//!
//! Runs before every handler, for every request type. It never builds a
//! response: a failed validation is returned as `HandlerError::Validation`
//! and the handler is not called. Errors from the handler pass through
//! untouched.

use tokio_util::sync::CancellationToken;

use crate::validation::ValidationExecutor;

use super::error::HandlerError;
use super::request::Request;

#[derive(Debug, Clone)]
pub struct ValidationBehavior {
    executor: ValidationExecutor,
}

impl ValidationBehavior {
    pub fn new(executor: ValidationExecutor) -> Self {
        Self { executor }
    }

    /// Validate `request`, then hand it to `next` if it passed.
    pub async fn handle<Q, F>(
        &self,
        request: Q,
        cancel: &CancellationToken,
        next: F,
    ) -> Result<Q::Response, HandlerError>
    where
        Q: Request,
        F: FnOnce(Q) -> Result<Q::Response, HandlerError>,
    {
        let outcome = self.executor.validate(&request, cancel).await?;
        if !outcome.is_valid() {
            tracing::debug!(
                request = Q::NAME,
                failures = outcome.failures().len(),
                "validation rejected request"
            );
            return Err(HandlerError::Validation(outcome));
        }
        next(request)
    }
}
