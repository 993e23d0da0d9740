//! Entity tags and conditional request evaluation.
//!
//! A book's entity tag is the MD5 digest of its content fields (author,
//! title, published, extras). Tags are recomputed from the current book on
//! every conditional request rather than stored, so they survive process
//! restarts and never go stale.
//!
//! [`evaluate`] applies the `If-Match` / `If-None-Match` rules of RFC 7232
//! section 6: `If-Match` is checked first and a mismatch fails the
//! precondition; a matching `If-None-Match` short-circuits reads to
//! `304 Not Modified` and fails anything else.

use axum::http::{header, HeaderMap, HeaderName, Method};

use crate::model::Book;

/// Content-derived cache validator for a book.
///
/// Holds the bare hex digest; [`EntityTag::to_string`] yields the quoted
/// wire form used in `ETag` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTag(String);

/// Keeps adjacent fields from running into each other in the digest input.
const FIELD_SEPARATOR: &[u8] = &[0x1f];

impl EntityTag {
    /// Derive the tag from a book's content fields.
    ///
    /// The id is deliberately excluded: the tag identifies content, and two
    /// loads of the same content must agree.
    pub fn from_book(book: &Book) -> Self {
        let mut context = md5::Context::new();
        context.consume(book.author.as_bytes());
        context.consume(FIELD_SEPARATOR);
        context.consume(book.title.as_bytes());
        context.consume(FIELD_SEPARATOR);
        context.consume(book.published.to_rfc3339().as_bytes());
        context.consume(FIELD_SEPARATOR);
        // BTreeMap iterates in key order, so identical extras always
        // serialize identically.
        let extras = serde_json::to_string(&book.extras).unwrap_or_default();
        context.consume(extras.as_bytes());

        let digest = context.compute();
        EntityTag(hex::encode(digest.0))
    }

    /// Raw tag value without quotes.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityTag {
    /// Quoted wire form, e.g. `"0a1b2c..."`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

/// Outcome of evaluating conditional headers against the current tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// No conditional header blocks the request
    Proceed,
    /// `If-None-Match` matched on a read; answer 304 with the tag
    NotModified,
    /// A precondition failed; answer 412
    Failed,
}

/// Evaluate `If-Match` / `If-None-Match` against the current entity tag.
///
/// Absent headers never block a request. Candidate tags compare by exact
/// value after unquoting; `*` matches any existing tag.
pub fn evaluate(method: &Method, headers: &HeaderMap, current: &EntityTag) -> Precondition {
    let if_match = candidates(headers, &header::IF_MATCH);
    if !if_match.is_empty() && !if_match.iter().any(|c| tag_matches(c, current)) {
        return Precondition::Failed;
    }

    let if_none_match = candidates(headers, &header::IF_NONE_MATCH);
    if if_none_match.iter().any(|c| tag_matches(c, current)) {
        return if *method == Method::GET || *method == Method::HEAD {
            Precondition::NotModified
        } else {
            Precondition::Failed
        };
    }

    Precondition::Proceed
}

/// Collect candidate tags from every occurrence of `name`, splitting
/// comma-separated lists.
fn candidates<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Vec<&'a str> {
    headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .collect()
}

fn tag_matches(candidate: &str, current: &EntityTag) -> bool {
    candidate == "*" || unquote(candidate) == current.value()
}

/// Strip one pair of surrounding double quotes, if present. Clients may
/// send either the quoted wire form or the bare value.
fn unquote(candidate: &str) -> &str {
    candidate
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(candidate)
}
