//! Rule sets: declarative field checks for one request type.
//!
//! ```ignore
//! struct CreatePostRules;
//!
//! impl RuleSet<CreatePost> for CreatePostRules {
//!     fn check(&self, request: &CreatePost) -> Vec<ValidationFailure> {
//!         Rules::new()
//!             .not_empty("title", &request.title)
//!             .not_empty("content", &request.content)
//!             .finish()
//!     }
//! }
//! ```

use super::failure::ValidationFailure;

/// A pure set of checks for requests of type `T`.
///
/// Implementations must not have side effects: the executor may run several
/// rule sets for the same request concurrently.
pub trait RuleSet<T>: Send + Sync {
    /// Evaluate every rule against `request`, returning all failures.
    fn check(&self, request: &T) -> Vec<ValidationFailure>;

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T, F> RuleSet<T> for F
where
    F: Fn(&T) -> Vec<ValidationFailure> + Send + Sync,
{
    fn check(&self, request: &T) -> Vec<ValidationFailure> {
        self(request)
    }
}

/// Accumulates failures; every rule runs regardless of earlier results.
#[derive(Debug, Default)]
pub struct Rules {
    failures: Vec<ValidationFailure>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text must contain something other than whitespace.
    pub fn not_empty(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.failures
                .push(ValidationFailure::new(field, format!("'{field}' is required.")));
        }
        self
    }

    /// Value must differ from its type's default (e.g. the nil UUID).
    pub fn not_default<V: Default + PartialEq>(mut self, field: &str, value: &V) -> Self {
        if *value == V::default() {
            self.failures.push(ValidationFailure::new(
                field,
                format!("'{field}' must not be empty."),
            ));
        }
        self
    }

    pub fn finish(self) -> Vec<ValidationFailure> {
        self.failures
    }
}
