//! In-memory book store.
//!
//! Hash-map backed implementation of [`BookStore`] used for local
//! development and tests. Contents live for the process lifetime only.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::book_store::BookStore;
use super::error::{StoreError, StoreResult};
use crate::model::{Book, BookDraft, BookId, BookPatch};

/// Thread-safe in-memory store keyed by book id.
#[derive(Default)]
pub struct MemoryStore {
    books: RwLock<HashMap<BookId, Book>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of books currently stored.
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    /// Whether the store holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Book>> {
        let mut books: Vec<Book> = self.books.read().values().cloned().collect();
        // Hash map iteration order is arbitrary; keep listings stable.
        books.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(books)
    }

    async fn get(&self, id: &BookId) -> StoreResult<Book> {
        self.books
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id.value()))
    }

    async fn create(&self, draft: BookDraft) -> StoreResult<Book> {
        let id = BookId::new(Uuid::new_v4().to_string());
        let book = Book::from_draft(id.clone(), draft);
        self.books.write().insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: &BookId, patch: BookPatch) -> StoreResult<Book> {
        let mut books = self.books.write();
        let book = books
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(id.value()))?;
        book.apply_patch(patch);
        Ok(book.clone())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }
}
