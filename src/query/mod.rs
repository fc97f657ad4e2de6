//! Query execution against the live session.
//!
//! - `read` — runs the user's query once and measures it
//! - `explain` — runs the EXPLAIN variant and decodes the plan rows
//!
//! Exactly two statements hit the server per analysis, sequentially, over the
//! same session. Failures from either are [`crate::error::AnalyzerError::Query`].

pub mod explain;
pub mod read;
