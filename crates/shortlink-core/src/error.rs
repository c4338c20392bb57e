use thiserror::Error;

/// Result type for store and gate operations.
pub type Result<T> = std::result::Result<T, ShortlinkError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortlinkError {
    /// Blank input, or a URL that fails the shape check.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The code is well-formed but nothing is stored under it.
    #[error("short url not found: {0}")]
    NotFound(String),
    /// The admission gate had no free slot. Retrying later may succeed.
    #[error("too many concurrent requests")]
    Rejected,
}
