//! Shared fixtures for the integration test suites.
#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use bookshelf::model::BookDraft;

/// Fixed publication date so derived entity tags are reproducible.
pub fn published(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

/// Draft with the required fields only.
pub fn draft(author: &str, title: &str) -> BookDraft {
    BookDraft {
        author: author.to_string(),
        title: title.to_string(),
        published: published(1900),
        extras: BTreeMap::new(),
    }
}

/// Draft carrying freeform extra fields.
pub fn draft_with_extras(author: &str, title: &str, extras: &[(&str, Value)]) -> BookDraft {
    let mut book = draft(author, title);
    book.extras = extras
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    book
}

/// JSON body for a valid create request.
pub fn draft_json(author: &str, title: &str) -> Value {
    json!({
        "author": author,
        "title": title,
        "published": "1900-01-01T00:00:00Z",
    })
}
