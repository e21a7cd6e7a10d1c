//! ValidatorRegistry: explicit mapping from request type to its rule sets.
//!
//! Built once at startup and handed to the executor and both dispatch
//! adapters. Registering the same rule set twice is allowed; both copies run.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use super::rules::RuleSet;

type RuleSets<T> = Vec<Arc<dyn RuleSet<T>>>;

/// Rule sets keyed by the request type they validate.
#[derive(Default)]
pub struct ValidatorRegistry {
    rule_sets: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule set for requests of type `T`.
    ///
    /// Uses builder pattern: returns `self` for chaining. Rule sets run in
    /// registration order.
    pub fn register<T, V>(mut self, rule_set: V) -> Self
    where
        T: 'static,
        V: RuleSet<T> + 'static,
    {
        let entry = self
            .rule_sets
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(RuleSets::<T>::new()));
        if let Some(rule_sets) = entry.downcast_mut::<RuleSets<T>>() {
            rule_sets.push(Arc::new(rule_set));
        }
        self
    }

    /// Rule sets registered for `T`, possibly none.
    pub fn rule_sets<T: 'static>(&self) -> &[Arc<dyn RuleSet<T>>] {
        self.rule_sets
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<RuleSets<T>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of request types with at least one rule set.
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("request_types", &self.rule_sets.len())
            .finish()
    }
}
