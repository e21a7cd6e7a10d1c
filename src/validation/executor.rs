//! ValidationExecutor: runs every rule set registered for a request.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio_util::sync::CancellationToken;

use super::failure::ValidationOutcome;
use super::registry::ValidatorRegistry;

/// The request was cancelled before validation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("validation cancelled")]
pub struct Cancelled;

/// Aggregates the failures of all rule sets registered for a request type.
///
/// Rule sets are joined, never raced: the outcome is only produced once all
/// of them have reported. Their failures are concatenated in registration
/// order, so scheduling never changes the result.
#[derive(Debug, Clone)]
pub struct ValidationExecutor {
    registry: Arc<ValidatorRegistry>,
}

impl ValidationExecutor {
    pub fn new(registry: Arc<ValidatorRegistry>) -> Self {
        Self { registry }
    }

    /// Validate `request` against the rule sets registered for `T`.
    ///
    /// With no rule sets registered the request is trivially valid. Returns
    /// `Cancelled` if `cancel` fires before every rule set has reported.
    pub async fn validate<T>(
        &self,
        request: &T,
        cancel: &CancellationToken,
    ) -> Result<ValidationOutcome, Cancelled>
    where
        T: Sync + 'static,
    {
        let rule_sets = self.registry.rule_sets::<T>();
        if rule_sets.is_empty() {
            return Ok(ValidationOutcome::new());
        }

        let checks = rule_sets.iter().map(|rule_set| async move {
            tracing::trace!(rule_set = rule_set.name(), "running rule set");
            rule_set.check(request)
        });

        let results = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Cancelled),
            results = join_all(checks) => results,
        };

        let mut outcome = ValidationOutcome::new();
        for failures in results {
            outcome.extend(failures);
        }
        Ok(outcome)
    }
}
