//! Error types for piiscrub.
//!
//! Every typed entry point (taking [`Category`](crate::Category) or
//! [`CategorySet`](crate::CategorySet)) is total. Errors only arise when a
//! category is named by text, e.g. from configuration or user input.

use thiserror::Error;

/// Errors returned by the textual entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The identifier does not name a registered category.
    #[error("unknown PII category: '{0}'")]
    UnknownCategory(String),
}

/// Result type for piiscrub operations.
pub type Result<T> = std::result::Result<T, Error>;
