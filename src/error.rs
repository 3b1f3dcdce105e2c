//! Error type shared by the page behaviors and their hosts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The store exists but a read or write was rejected (quota, privacy mode).
    #[error("storage operation failed: {0}")]
    Storage(String),

    /// No persistent store is reachable from this page.
    #[error("storage unavailable")]
    StorageUnavailable,

    #[error("failed to parse page config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid page config: {0}")]
    InvalidConfig(String),

    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A DOM call threw; carries the debug rendering of the JS value.
    #[error("DOM call failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;
