//! # Bookshelf
//!
//! Books REST service with entity-tag conditional requests.
//!
//! This crate exposes a single "books" resource over HTTP: list, fetch by
//! id, create, and partial update, all delegating to an abstract
//! asynchronous [`store::BookStore`]. Reads and updates evaluate
//! `If-None-Match` / `If-Match` preconditions against a content-derived
//! entity tag, so unchanged books answer `304 Not Modified` and stale
//! updates are rejected with `412 Precondition Failed` before the store is
//! written.
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`model`]: the book entity plus the draft/patch input types
//! - [`store`]: the store trait, its error type, and the in-memory backend
//! - [`http`]: axum router, handlers, and entity-tag evaluation
//! - [`config`]: TOML configuration with environment overrides
//!
//! The `bookshelf-server` binary wires these together and serves the API.

pub mod config;
pub mod http;
pub mod model;
pub mod store;
