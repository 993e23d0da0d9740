//! Expanded tests for MemoryStore and seed loading.
//!
//! These tests cover concurrent access patterns, trait-object usage, and
//! the JSON seed file loader.

mod support;

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

use serde_json::json;

use bookshelf::model::BookPatch;
use bookshelf::store::{seed_from_file, BookStore, MemoryStore, StoreError};

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_concurrent_creates_are_all_visible() {
    let store = Arc::new(MemoryStore::new());

    let mut handles = vec![];
    for i in 0..10 {
        let store_clone = Arc::clone(&store);
        let handle = tokio::spawn(async move {
            store_clone
                .create(support::draft("Author", &format!("Book {}", i)))
                .await
        });
        handles.push(handle);
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let created = handle.await.unwrap().unwrap();
        ids.insert(created.id);
    }

    assert_eq!(ids.len(), 10);
    let books = store.list().await.unwrap();
    assert_eq!(books.len(), 10);
}

#[tokio::test]
async fn test_concurrent_updates_leave_consistent_state() {
    let store = Arc::new(MemoryStore::new());
    let created = store
        .create(support::draft("Mary Shelley", "Frankenstein"))
        .await
        .unwrap();

    let mut handles = vec![];
    for title in ["First Rewrite", "Second Rewrite"] {
        let store_clone = Arc::clone(&store);
        let id = created.id.clone();
        let handle = tokio::spawn(async move {
            for _ in 0..50 {
                let patch: BookPatch =
                    serde_json::from_value(json!({ "title": title })).unwrap();
                store_clone.update(&id, patch).await.unwrap();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.await.unwrap();
    }

    // One of the writers finished last; either way the book is intact.
    let book = store.get(&created.id).await.unwrap();
    assert!(book.title == "First Rewrite" || book.title == "Second Rewrite");
    assert_eq!(book.author, "Mary Shelley");
}

#[tokio::test]
async fn test_store_works_behind_a_trait_object() {
    let store: Arc<dyn BookStore> = Arc::new(MemoryStore::new());

    let created = store
        .create(support::draft("Herman Melville", "Moby-Dick"))
        .await
        .unwrap();
    let fetched = store.get(&created.id).await.unwrap();
    assert_eq!(fetched.title, "Moby-Dick");
    assert!(store.health_check().await.unwrap());
}

// =============================================================================
// Seed loading
// =============================================================================

fn temp_seed_file(contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("bookshelf-seed-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("books.json");
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_seed_from_file_creates_every_draft() {
    let path = temp_seed_file(
        r#"[
        {
            "author": "Mary Shelley",
            "title": "Frankenstein",
            "published": "1818-01-01T00:00:00Z",
            "genre": "gothic"
        },
        {
            "author": "Herman Melville",
            "title": "Moby-Dick",
            "published": "1851-10-18T00:00:00Z"
        }
    ]"#,
    );

    let store = MemoryStore::new();
    let seeded = seed_from_file(&store, &path).await.unwrap();
    assert_eq!(seeded, 2);

    let books = store.list().await.unwrap();
    assert_eq!(books.len(), 2);
    let frankenstein = books.iter().find(|b| b.title == "Frankenstein").unwrap();
    assert_eq!(frankenstein.extras["genre"], json!("gothic"));

    let ids: HashSet<_> = books.iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids.len(), 2);

    fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[tokio::test]
async fn test_seed_from_missing_file_is_a_configuration_error() {
    let store = MemoryStore::new();
    let err = seed_from_file(&store, std::path::Path::new("/nonexistent/books.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Configuration { .. }));
    assert!(err.to_string().contains("read"));
}

#[tokio::test]
async fn test_seed_from_malformed_json_is_a_configuration_error() {
    let path = temp_seed_file("[{ broken");

    let store = MemoryStore::new();
    let err = seed_from_file(&store, &path).await.unwrap_err();
    assert!(matches!(err, StoreError::Configuration { .. }));
    assert!(err.to_string().contains("parse"));

    fs::remove_dir_all(path.parent().unwrap()).ok();
}

#[tokio::test]
async fn test_seed_rejects_blank_drafts() {
    let path = temp_seed_file(
        r#"[
        {
            "author": "  ",
            "title": "Nameless",
            "published": "1900-01-01T00:00:00Z"
        }
    ]"#,
    );

    let store = MemoryStore::new();
    let err = seed_from_file(&store, &path).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation { .. }));
    assert!(store.is_empty());

    fs::remove_dir_all(path.parent().unwrap()).ok();
}
