use std::sync::Arc;

use axum::extract::FromRef;

use crate::mediator::Mediator;
use crate::posts::{self, PostStore};
use crate::problem::{Environment, ErrorMapper};
use crate::validation::{ValidationExecutor, ValidatorRegistry};

/// Shared state for both route groups.
///
/// The filter group talks to the store directly; the pipeline group sends
/// requests through the mediator. Both validate with the same executor.
#[derive(Clone)]
pub struct AppState {
    pub store: PostStore,
    pub executor: ValidationExecutor,
    pub mediator: Arc<Mediator<PostStore>>,
    pub mapper: ErrorMapper,
}

impl AppState {
    pub fn new(store: PostStore, validators: ValidatorRegistry, environment: Environment) -> Self {
        let executor = ValidationExecutor::new(Arc::new(validators));
        let mediator = Arc::new(posts::mediator(store.clone(), executor.clone()));
        Self {
            store,
            executor,
            mediator,
            mapper: ErrorMapper::new(environment),
        }
    }

    /// Seeded store and the standard post rule sets.
    pub fn standard(environment: Environment) -> Self {
        Self::new(PostStore::seeded(), posts::validators(), environment)
    }
}

impl FromRef<AppState> for PostStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for ValidationExecutor {
    fn from_ref(state: &AppState) -> Self {
        state.executor.clone()
    }
}

impl FromRef<AppState> for Arc<Mediator<PostStore>> {
    fn from_ref(state: &AppState) -> Self {
        state.mediator.clone()
    }
}
