//! Request boundary: per-request context and the single place where raised
//! failures become Problem Details responses.
//!
//! Every request gets a [`TraceId`] and a cancellation token, stored in a
//! [`RequestContext`] extension. Handlers return `HandlerError`s; their
//! `IntoResponse` only tags the response with the failure, and
//! [`boundary`] renders it through the [`ErrorMapper`] on the way out.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use axum::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use crate::mediator::HandlerError;
use crate::problem::{ErrorMapper, MappedError, ProblemDetails, RequestInfo, PROBLEM_JSON};

/// Response header carrying the request's trace id.
pub const TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-trace-id");

/// Per-request correlation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What handlers and extractors know about the current request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    trace_id: TraceId,
    path: String,
    cancel: CancellationToken,
}

impl RequestContext {
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Cancelled when the request is abandoned before completing.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = HandlerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .ok_or_else(missing_context)
    }
}

pub(crate) fn missing_context() -> HandlerError {
    HandlerError::other("request boundary middleware is not installed")
}

/// A failure raised by a handler, waiting for the boundary to render it.
#[derive(Clone)]
struct RaisedFailure(Arc<HandlerError>);

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = status.into_response();
        response
            .extensions_mut()
            .insert(RaisedFailure(Arc::new(self)));
        response
    }
}

/// Middleware installed around every route.
///
/// A request arriving with a `CancellationToken` extension gets a child of
/// it; the token is cancelled if the request future is dropped early.
pub async fn boundary(State(mapper): State<ErrorMapper>, mut request: Request, next: Next) -> Response {
    let trace_id = TraceId::generate();
    let path = request.uri().path().to_string();
    let method = request.method().clone();
    let cancel = request
        .extensions()
        .get::<CancellationToken>()
        .map(CancellationToken::child_token)
        .unwrap_or_default();

    request.extensions_mut().insert(RequestContext {
        trace_id,
        path: path.clone(),
        cancel: cancel.clone(),
    });

    let span = tracing::info_span!("request", %method, %path, %trace_id);
    async move {
        let started = Instant::now();
        let guard = cancel.drop_guard();
        let mut response = next.run(request).await;
        guard.disarm();

        if let Some(RaisedFailure(failure)) = response.extensions_mut().remove::<RaisedFailure>() {
            let info = RequestInfo {
                path,
                trace_id: trace_id.to_string(),
                response_started: false,
            };
            if let Some(mapped) = mapper.try_handle(&failure, &info) {
                response = render(mapped);
            }
        }

        if let Ok(value) = HeaderValue::from_str(&trace_id.to_string()) {
            response.headers_mut().insert(TRACE_ID_HEADER, value);
        }

        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}

fn render(mapped: MappedError) -> Response {
    let status = StatusCode::from_u16(mapped.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match mapped.body {
        Some(problem) => problem_response(status, &problem),
        None => status.into_response(),
    }
}

/// Serialize `problem` as an `application/problem+json` response.
pub(crate) fn problem_response(status: StatusCode, problem: &ProblemDetails) -> Response {
    match serde_json::to_vec(problem) {
        Ok(body) => (status, [(header::CONTENT_TYPE, PROBLEM_JSON)], body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize problem details");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
