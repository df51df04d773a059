use thiserror::Error;

/// Errors surfaced by the leaderboard store. `NotFound` is a normal negative
/// result; `BackingStore` is a retryable transport/transaction failure. The
/// store never retries internally.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no matching record found")]
    NotFound,
    #[error("backing store error: {0}")]
    BackingStore(#[from] redis::RedisError),
}
