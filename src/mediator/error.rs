//! Error types for request handlers and the dispatch pipeline.

use std::backtrace::Backtrace;
use std::error::Error;
use std::sync::Arc;

use crate::error::StoreError;
use crate::validation::{Cancelled, ValidationOutcome};

/// Every way a request can fail.
///
/// Handlers return these instead of building responses; the boundary maps
/// them to wire format in one place.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// One or more validation rules failed.
    #[error("validation failed for {} field(s)", .0.errors().len())]
    Validation(ValidationOutcome),
    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Missing or invalid credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// The request carried an argument that could not be used (e.g. a
    /// malformed body).
    #[error("invalid argument: {0}")]
    BadArgument(String),
    /// The operation is not valid in the current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// The caller went away before the request finished.
    #[error("request cancelled")]
    Cancelled,
    /// No handler registered for this request type.
    #[error("no handler registered for request {0}")]
    UnknownRequest(&'static str),
    /// The post store failed.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
    /// Anything else.
    #[error("{source}")]
    Other {
        source: Box<dyn Error + Send + Sync>,
        backtrace: Arc<Backtrace>,
    },
}

impl From<Cancelled> for HandlerError {
    fn from(_: Cancelled) -> Self {
        HandlerError::Cancelled
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::BadArgument(err.to_string())
    }
}

impl HandlerError {
    /// Wrap an unclassified error, capturing a backtrace where enabled.
    pub fn other(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        HandlerError::Other {
            source: err.into(),
            backtrace: Arc::new(Backtrace::capture()),
        }
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Validation(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::Unauthorized(_) => 401,
            HandlerError::BadArgument(_) => 400,
            HandlerError::InvalidOperation(_) => 400,
            HandlerError::Cancelled => 499,
            HandlerError::UnknownRequest(_) => 500,
            HandlerError::Store(_) => 500,
            HandlerError::Other { .. } => 500,
        }
    }

    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::Validation(_) => "validation",
            HandlerError::NotFound(_) => "not_found",
            HandlerError::Unauthorized(_) => "unauthorized",
            HandlerError::BadArgument(_) => "bad_argument",
            HandlerError::InvalidOperation(_) => "invalid_operation",
            HandlerError::Cancelled => "cancelled",
            HandlerError::UnknownRequest(_) => "unknown_request",
            HandlerError::Store(_) => "store",
            HandlerError::Other { .. } => "unclassified",
        }
    }

    /// Fully qualified variant name, exposed in development error bodies.
    pub fn type_name(&self) -> &'static str {
        match self {
            HandlerError::Validation(_) => "HandlerError::Validation",
            HandlerError::NotFound(_) => "HandlerError::NotFound",
            HandlerError::Unauthorized(_) => "HandlerError::Unauthorized",
            HandlerError::BadArgument(_) => "HandlerError::BadArgument",
            HandlerError::InvalidOperation(_) => "HandlerError::InvalidOperation",
            HandlerError::Cancelled => "HandlerError::Cancelled",
            HandlerError::UnknownRequest(_) => "HandlerError::UnknownRequest",
            HandlerError::Store(_) => "HandlerError::Store",
            HandlerError::Other { .. } => "HandlerError::Other",
        }
    }

    /// Backtrace captured when the error was raised, if any.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            HandlerError::Other { backtrace, .. } => Some(backtrace.as_ref()),
            _ => None,
        }
    }
}
