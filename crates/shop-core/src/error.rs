//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The common base error for `shop-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `shop-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
