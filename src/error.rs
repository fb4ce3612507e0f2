//! Error types for the admin sidebar

use thiserror::Error;

/// Errors raised at the sidebar's boundaries: menu configuration input and
/// the collapsed-flag store.
#[derive(Error, Debug)]
pub enum SidebarError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid menu configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for sidebar operations
pub type SidebarResult<T> = Result<T, SidebarError>;
