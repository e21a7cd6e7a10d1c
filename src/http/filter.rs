//! Filter variant: validation wrapped directly around a route handler.
//!
//! `Validated<T>` is used in place of `Json<T>`:
//! 1. Parse the JSON body (a malformed body is a `BadArgument` failure)
//! 2. Run every rule set registered for `T`
//! 3. On failure answer 400 with a validation problem; the handler never runs
//!
//! ```ignore
//! async fn create(
//!     State(store): State<PostStore>,
//!     Validated(request): Validated<CreatePost>,
//! ) -> Result<Json<CreatedPost>, HandlerError> {
//!     // request passed validation
//! }
//! ```

use axum::async_trait;
use axum::extract::{FromRef, FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::mediator::HandlerError;
use crate::problem::ProblemDetails;
use crate::validation::ValidationExecutor;

use super::boundary::{missing_context, problem_response, RequestContext};

/// JSON body whose rejection is a `BadArgument` failure.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HandlerError::BadArgument(rejection.body_text()))?;
        Ok(Payload(value))
    }
}

/// JSON body that has passed validation.
pub struct Validated<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
    S: Send + Sync,
    ValidationExecutor: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let context = req
            .extensions()
            .get::<RequestContext>()
            .cloned()
            .ok_or_else(|| missing_context().into_response())?;

        let Payload(value) = Payload::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let executor = ValidationExecutor::from_ref(state);
        match executor.validate(&value, context.cancellation()).await {
            Ok(outcome) if outcome.is_valid() => Ok(Validated(value)),
            Ok(outcome) => {
                tracing::debug!(
                    failures = outcome.failures().len(),
                    "validation filter short-circuited"
                );
                let problem = ProblemDetails::validation(
                    outcome.errors(),
                    context.path(),
                    context.trace_id().to_string(),
                );
                Err(problem_response(StatusCode::BAD_REQUEST, &problem))
            }
            Err(cancelled) => Err(HandlerError::from(cancelled).into_response()),
        }
    }
}
