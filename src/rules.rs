//! Plan-analysis rule engine.
//!
//! Takes the ordered EXPLAIN plan rows and derives two parallel lists:
//! detected problems and optimization suggestions. Pure and deterministic —
//! the same plan always yields the same output, which is what makes the
//! engine cheap to unit test without a server.
//!
//! Rules are independent: a single row can fire several of them, and each
//! firing appends exactly one problem/suggestion pair in rule order. The one
//! asymmetry is the fallback — a clean plan yields a single suggestion with
//! no problem.

mod engine;

pub use engine::{evaluate, group_thousands, Analysis};
