//! Data Transfer Objects for the HTTP API.
//!
//! Books travel in their model form ([`crate::model::Book`] serializes with
//! flattened extras), so only the auxiliary response shapes live here.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Store connectivity, "connected" or "disconnected"
    pub store: String,
}
