//! ErrorMapper: translates raised failures into Problem Details.

use std::backtrace::BacktraceStatus;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::mediator::HandlerError;
use crate::validation::ValidationErrors;

use super::details::{Cause, ProblemDetails};

const VALIDATION_DETAIL: &str = "One or more validation errors occurred.";
const UNAUTHORIZED_DETAIL: &str = "You are not authorized to access this resource.";
const BAD_ARGUMENT_DETAIL: &str = "The request contained an invalid argument.";
const INVALID_OPERATION_DETAIL: &str = "The requested operation is not valid in the current state.";
const INTERNAL_DETAIL: &str = "An unexpected error occurred.";

/// Deployment environment. Development exposes internal error details.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment '{0}' (expected development or production)")]
pub struct UnknownEnvironment(String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// What the boundary needs to render one failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub status: u16,
    pub title: &'static str,
    pub detail: Option<String>,
    pub errors: Option<ValidationErrors>,
    /// Send the status only, no body.
    pub suppress_body: bool,
}

/// Where a failure happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub path: String,
    pub trace_id: String,
    /// The response head has already been sent.
    pub response_started: bool,
}

/// Status plus optional body, ready to be written.
#[derive(Debug, Clone)]
pub struct MappedError {
    pub status: u16,
    pub body: Option<ProblemDetails>,
}

/// Maps every `HandlerError` to an `ErrorContext` and a Problem Details body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorMapper {
    environment: Environment,
}

impl ErrorMapper {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Pick status, title and detail for a failure. Logs the failure first.
    pub fn context(&self, failure: &HandlerError) -> ErrorContext {
        log_failure(failure);

        let development = self.is_development();
        let internal = |generic: &str| {
            if development {
                failure.to_string()
            } else {
                generic.to_string()
            }
        };

        let (title, detail, errors, suppress_body) = match failure {
            HandlerError::Validation(outcome) => (
                "Validation Error",
                Some(VALIDATION_DETAIL.to_string()),
                Some(outcome.errors()),
                false,
            ),
            HandlerError::NotFound(message) => {
                ("Resource Not Found", Some(message.clone()), None, false)
            }
            HandlerError::Unauthorized(_) => {
                ("Unauthorized", Some(UNAUTHORIZED_DETAIL.to_string()), None, false)
            }
            HandlerError::BadArgument(message) => (
                "Invalid Argument",
                Some(if development { message.clone() } else { BAD_ARGUMENT_DETAIL.to_string() }),
                None,
                false,
            ),
            HandlerError::InvalidOperation(message) => (
                "Invalid Operation",
                Some(if development {
                    message.clone()
                } else {
                    INVALID_OPERATION_DETAIL.to_string()
                }),
                None,
                false,
            ),
            HandlerError::Cancelled => ("Request Cancelled", None, None, true),
            HandlerError::UnknownRequest(_) | HandlerError::Store(_) | HandlerError::Other { .. } => (
                "Internal Server Error",
                Some(internal(INTERNAL_DETAIL)),
                None,
                false,
            ),
        };

        ErrorContext {
            status: failure.status_code(),
            title,
            detail,
            errors,
            suppress_body,
        }
    }

    /// Build the response body for `failure`, or `None` if it is suppressed.
    pub fn problem(&self, failure: &HandlerError, info: &RequestInfo) -> MappedError {
        let context = self.context(failure);
        if context.suppress_body {
            return MappedError {
                status: context.status,
                body: None,
            };
        }

        let mut problem = ProblemDetails::new(context.status, context.title, info.trace_id.clone());
        problem.detail = context.detail;
        problem.errors = context.errors;
        problem.instance = Some(info.path.clone());

        if self.is_development() {
            problem.error_type = Some(failure.type_name());
            problem.backtrace = failure
                .backtrace()
                .filter(|backtrace| backtrace.status() == BacktraceStatus::Captured)
                .map(ToString::to_string);
            problem.cause = failure.source().map(|source| Cause {
                message: source.to_string(),
                details: format!("{source:?}"),
            });
        }

        MappedError {
            status: context.status,
            body: Some(problem),
        }
    }

    /// Map `failure` unless the response is already on the wire.
    ///
    /// Returns `None` when the response has started; writing a second head is
    /// a bug in the caller, so it is logged and left alone.
    pub fn try_handle(&self, failure: &HandlerError, info: &RequestInfo) -> Option<MappedError> {
        if info.response_started {
            tracing::error!(
                kind = failure.kind(),
                trace_id = %info.trace_id,
                error = %failure,
                "response already started, cannot map failure"
            );
            return None;
        }
        Some(self.problem(failure, info))
    }
}

fn log_failure(failure: &HandlerError) {
    let status = failure.status_code();
    match status {
        499 => tracing::debug!(kind = failure.kind(), status, "request cancelled"),
        500.. => tracing::error!(kind = failure.kind(), status, error = %failure, "request failed"),
        _ => tracing::warn!(kind = failure.kind(), status, error = %failure, "request failed"),
    }
}
