//! Book storage.
//!
//! The [`BookStore`] trait abstracts asynchronous persistence of books;
//! [`MemoryStore`] is the bundled hash-map implementation. Seed data can be
//! loaded from a JSON file at startup via [`seed_from_file`].

pub mod book_store;
pub mod error;
pub mod memory;

pub use book_store::BookStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use std::path::Path;

use crate::model::BookDraft;

/// Load seed books from a JSON file into `store`.
///
/// The file holds a JSON array of book drafts. Each entry goes through
/// [`BookStore::create`], so ids are assigned fresh on every load. Returns
/// the number of books created.
pub async fn seed_from_file(store: &dyn BookStore, path: &Path) -> StoreResult<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        StoreError::configuration(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;

    let drafts: Vec<BookDraft> = serde_json::from_str(&content).map_err(|e| {
        StoreError::configuration(format!("Failed to parse seed file {}: {}", path.display(), e))
    })?;

    let mut created = 0;
    for draft in drafts {
        draft.validate().map_err(StoreError::validation)?;
        store.create(draft).await?;
        created += 1;
    }
    Ok(created)
}
