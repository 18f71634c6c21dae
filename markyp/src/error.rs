//! Error types for markyp.

use thiserror::Error;

/// Result type alias for markyp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building parsers or parsing markup.
#[derive(Error, Debug)]
pub enum Error {
    /// Structural problem in the markup (no root, unbalanced tags, bad entity).
    #[error("XML parse error: {0}")]
    Parse(String),

    /// Rule rejected at registration time.
    #[error("Invalid factory rule: {0}")]
    InvalidRule(String),

    /// A factory refused the children or properties it was given.
    #[error("Factory {name} failed: {reason}")]
    Factory {
        /// Name of the factory that failed.
        name: String,
        /// What was wrong with the input.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error from quick-xml.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl Error {
    pub(crate) fn factory(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Factory {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
