//! Error types for the caller-facing surface of the layout engine
//!
//! The layout pipeline itself never fails: degenerate input is corrected
//! silently. These errors cover validation, view mode parsing and settings
//! loading only.

use thiserror::Error;

/// Result type for layout operations that can fail
pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("System has bodies but none of them is a root body")]
    NoRootBody,

    #[error("Duplicate body id: {0}")]
    DuplicateBodyId(String),

    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),

    #[error("Invalid layout settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}
