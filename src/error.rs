//! Error kinds for the analyzer.
//!
//! The driver's own message is always surfaced verbatim — this is an
//! interactive diagnostic tool, so errors are shown to the user rather than
//! translated or retried.

/// Fatal analysis errors. There is no retry path for either variant.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The database session could not be established; analysis never starts.
    #[error("error connecting to MySQL database: {0}")]
    Connection(#[source] sqlx::Error),

    /// The user's query or its EXPLAIN variant failed. The session is still
    /// released by the caller before this propagates.
    #[error("error during analysis: {0}")]
    Query(#[source] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
