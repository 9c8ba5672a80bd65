//! Error types for the catalog and its server.
//!
//! Components themselves never fail; these cover story lookup, configuration
//! and I/O around them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Catalog error type.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No story registered under the requested slugs.
    #[error("Story not found: {group}/{story}")]
    StoryNotFound {
        /// Requested group slug.
        group: String,
        /// Requested story slug.
        story: String,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O failure, e.g. binding the listener.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::StoryNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(name: "catalog.error", error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}
