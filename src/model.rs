//! Book domain model.
//!
//! The [`Book`] entity plus the two client-facing input shapes:
//! [`BookDraft`] for creation and [`BookPatch`] for partial updates. Fields
//! beyond the required trio (author, title, published) travel in a freeform
//! `extras` map that is flattened into the JSON object on the wire; the
//! `id` key is reserved for the server-assigned identifier.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extras may not carry this key: flattening it would emit a duplicate
/// member shadowing the server-assigned id.
const RESERVED_KEY: &str = "id";

/// Unique identifier for a book
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(pub String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        BookId(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book as stored and served.
///
/// `extras` holds whatever fields the client supplied beyond the required
/// ones. It is a `BTreeMap` so iteration order is stable, which keeps the
/// derived entity tag independent of insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier
    pub id: BookId,
    /// Book author
    pub author: String,
    /// Book title
    pub title: String,
    /// Publication date
    pub published: DateTime<Utc>,
    /// Freeform fields, flattened into the JSON object
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

impl Book {
    /// Build a book from a draft under a freshly assigned id.
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Book {
            id,
            author: draft.author,
            title: draft.title,
            published: draft.published,
            extras: draft.extras,
        }
    }

    /// Merge a partial update into this book.
    ///
    /// Absent fields are left untouched. `extras` entries merge per key; a
    /// JSON `null` value removes the key. An `id` entry is ignored, the
    /// identifier is not patchable.
    pub fn apply_patch(&mut self, patch: BookPatch) {
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
        for (key, value) in patch.extras {
            if key == RESERVED_KEY {
                continue;
            }
            if value.is_null() {
                self.extras.remove(&key);
            } else {
                self.extras.insert(key, value);
            }
        }
    }
}

/// Client input for creating a book. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDraft {
    pub author: String,
    pub title: String,
    pub published: DateTime<Utc>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

impl BookDraft {
    /// Check the required fields carry content.
    ///
    /// Serde already rejects missing or mistyped fields; this catches the
    /// present-but-blank case and a client-supplied `id`, so such drafts
    /// never reach the store.
    pub fn validate(&self) -> Result<(), String> {
        if self.author.trim().is_empty() {
            return Err("author must not be blank".to_string());
        }
        if self.title.trim().is_empty() {
            return Err("title must not be blank".to_string());
        }
        if self.extras.contains_key(RESERVED_KEY) {
            return Err("id is assigned by the server".to_string());
        }
        Ok(())
    }
}

/// Client input for partially updating a book.
///
/// Every field is optional; unknown keys land in `extras` and merge into
/// the stored book's extras.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}
