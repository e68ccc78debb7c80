//! Error types for the lookup layer
//!
//! Cache operations themselves are total and never fail; the only errors in
//! this crate come from the authoritative lookup source behind the cache.

use thiserror::Error;

// == Lookup Error Enum ==
/// Errors surfaced by the memoized lookup wrapper.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The authoritative source failed while resolving a key
    #[error("lookup source failed for key '{key}': {source}")]
    Source {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the lookup layer.
pub type Result<T> = std::result::Result<T, LookupError>;
