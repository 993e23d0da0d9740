//! Book store trait for asynchronous persistence operations.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::model::{Book, BookDraft, BookId, BookPatch};

/// Abstract asynchronous store of books.
///
/// Every operation returns a future the caller awaits; none of them block.
/// Failures surface to the caller unchanged: retry or backoff policy, if
/// any, belongs inside the implementation, never in the handlers.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across request handlers behind an `Arc`.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch every book in the store.
    async fn list(&self) -> StoreResult<Vec<Book>>;

    /// Fetch a single book by id.
    ///
    /// Returns `StoreError::NotFound` when no book exists under `id`.
    async fn get(&self, id: &BookId) -> StoreResult<Book>;

    /// Persist a new book from a draft, assigning it a fresh id.
    ///
    /// The caller validates the draft first; the store treats it as
    /// well-formed.
    async fn create(&self, draft: BookDraft) -> StoreResult<Book>;

    /// Apply a partial update to the book under `id`.
    ///
    /// Returns the updated book, or `StoreError::NotFound` when no book
    /// exists under `id`.
    async fn update(&self, id: &BookId, patch: BookPatch) -> StoreResult<Book>;

    /// Report whether the backing store is reachable.
    async fn health_check(&self) -> StoreResult<bool>;
}
