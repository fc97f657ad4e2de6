//! Library surface exposed for criterion benchmarks and unit testing.
//! The binary entry point lives in src/main.rs.

pub mod cli;
pub mod db;
pub mod error;
pub mod plan;
pub mod query;
pub mod render;
pub mod report;
pub mod rules;
