//! Site Errors
//!
//! The few fallible seams of the site. Views handle these at the boundary
//! (fallback + warning) instead of surfacing them to the reader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// Time-zone identifier not found in the IANA database
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// Embedded site configuration could not be parsed
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
