/// Errors raised by the in-memory post store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("post store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
