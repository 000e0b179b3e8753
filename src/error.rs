//! Error types for grafla.
//!
//! Graph edits never fail, see [`crate::Mutation`]. Errors only come from bounded searches and
//! from reading graphs out of text.

use thiserror::Error;

/// Why a bounded search stopped before finishing.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchError {
    /// The [`crate::CancelToken`] passed in the options was triggered.
    #[error("search cancelled")]
    Cancelled,

    /// A branch grew past the configured number of vertices.
    #[error("search exceeded the depth limit of {limit} vertices")]
    DepthLimitExceeded { limit: usize },
}

/// Edge list parsing error.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Line has an empty endpoint, e.g. `1,` or `,`.
    #[error("line {line}: expected 'u,v' or a single vertex")]
    MissingEndpoint { line: usize },

    #[error("line {line}: expected at most two comma separated vertices")]
    TooManyFields { line: usize },

    #[error("line {line}: invalid vertex '{token}'")]
    InvalidVertex { line: usize, token: String },
}
