//! problem: the boundary translation from failures to Problem Details.
//!
//! | Failure | Status | Title |
//! |---|---|---|
//! | `Validation` | 400 | Validation Error |
//! | `NotFound` | 404 | Resource Not Found |
//! | `Unauthorized` | 401 | Unauthorized |
//! | `BadArgument` | 400 | Invalid Argument |
//! | `InvalidOperation` | 400 | Invalid Operation |
//! | `Cancelled` | 499 | Request Cancelled (no body) |
//! | anything else | 500 | Internal Server Error |

mod details;
mod mapper;

pub use details::{type_uri, Cause, ProblemDetails, PROBLEM_JSON, VALIDATION_PROBLEM_TITLE};
pub use mapper::{
    Environment, ErrorContext, ErrorMapper, MappedError, RequestInfo, UnknownEnvironment,
};
