//! HTTP server module for the bookshelf service.
//!
//! This module provides an axum-based HTTP server that exposes the books
//! resource as a REST API on top of the store layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - Entity-tag preconditions (If-Match / If-None-Match)    │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Store Layer (store/)                                     │
//! │  - BookStore trait                                        │
//! │  - MemoryStore                                            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod etag;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
