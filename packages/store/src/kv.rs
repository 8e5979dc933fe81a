//! # Key-value persistence behind the session layer
//!
//! Everything this client persists across restarts is a small set of string
//! values under well-known keys (see [`crate::vault`]). [`KeyValueStore`] is
//! the async interface those reads and writes go through, so the same session
//! logic works against an in-memory store (tests, ephemeral sessions) or the
//! filesystem ([`crate::FileStore`]) without change.
//!
//! Failures are never fatal to the caller: the session layer treats a failed
//! read as an absent value and logs-and-continues on a failed write, because
//! the in-memory state is authoritative for the running process.

use thiserror::Error;

/// Errors from a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt stored value: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Async interface for storing and retrieving persisted values.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
