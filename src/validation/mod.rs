//! validation: rule sets, the validator registry and the executor.
//!
//! Rule sets are registered per request type on a [`ValidatorRegistry`] at
//! startup. The [`ValidationExecutor`] runs all of them for a request and
//! returns a [`ValidationOutcome`]; deciding what a failure means for the
//! caller is left to the dispatch adapters.

mod executor;
mod failure;
mod registry;
mod rules;

pub use executor::{Cancelled, ValidationExecutor};
pub use failure::{ValidationErrors, ValidationFailure, ValidationOutcome};
pub use registry::ValidatorRegistry;
pub use rules::{RuleSet, Rules};
