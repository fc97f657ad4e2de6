use std::time::Instant;

use sqlx::MySqlPool;

use crate::error::{AnalyzerError, Result};

/// Measured execution of a single query.
pub struct Timing {
    /// Wall-clock time around execute + fetch-all, from a monotonic clock.
    pub execution_time_ms: f64,
    /// Rows actually materialized by the fetch, not an optimizer estimate.
    pub row_count: usize,
}

/// Execute the literal query exactly once and time it.
pub async fn measure(pool: &MySqlPool, sql: &str) -> Result<Timing> {
    let start = Instant::now();
    let rows = sqlx::query(sql)
        .fetch_all(pool)
        .await
        .map_err(AnalyzerError::Query)?;
    let execution_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    Ok(Timing {
        execution_time_ms,
        row_count: rows.len(),
    })
}
