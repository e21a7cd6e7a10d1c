//! Problem Details (RFC 9457 / 7807) wire bodies.

use serde::Serialize;

use crate::validation::ValidationErrors;

/// Media type of every problem body.
pub const PROBLEM_JSON: &str = "application/problem+json";

/// Title of the filter variant's direct validation response.
pub const VALIDATION_PROBLEM_TITLE: &str = "One or more validation errors occurred.";

/// Reference URI describing a status code.
pub fn type_uri(status: u16) -> &'static str {
    match status {
        400 => "https://tools.ietf.org/html/rfc9110#section-15.5.1",
        401 => "https://tools.ietf.org/html/rfc9110#section-15.5.2",
        404 => "https://tools.ietf.org/html/rfc9110#section-15.5.5",
        500 => "https://tools.ietf.org/html/rfc9110#section-15.6.1",
        _ => "about:blank",
    }
}

/// Structured HTTP error body.
///
/// `errors` is only present for validation failures. `errorType`,
/// `backtrace` and `cause` are only filled in development mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: &'static str,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

/// The error that caused a failure, as exposed in development mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cause {
    pub message: String,
    pub details: String,
}

impl ProblemDetails {
    pub fn new(status: u16, title: impl Into<String>, trace_id: impl Into<String>) -> Self {
        Self {
            type_uri: type_uri(status),
            title: title.into(),
            status,
            detail: None,
            instance: None,
            errors: None,
            trace_id: trace_id.into(),
            error_type: None,
            backtrace: None,
            cause: None,
        }
    }

    /// The filter variant's direct validation response body.
    pub fn validation(
        errors: ValidationErrors,
        instance: impl Into<String>,
        trace_id: impl Into<String>,
    ) -> Self {
        Self {
            errors: Some(errors),
            instance: Some(instance.into()),
            ..Self::new(400, VALIDATION_PROBLEM_TITLE, trace_id)
        }
    }
}
