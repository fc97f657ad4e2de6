use sqlx::MySqlPool;

use crate::error::{AnalyzerError, Result};
use crate::plan::PlanRow;

/// Fetch the classic `EXPLAIN` plan for a query as a distinct statement on
/// the same session. Row order is the engine's join/step order and is
/// preserved as returned.
pub async fn fetch_plan(pool: &MySqlPool, sql: &str) -> Result<Vec<PlanRow>> {
    let explain_sql = format!("EXPLAIN {sql}");
    let rows = sqlx::query(&explain_sql)
        .fetch_all(pool)
        .await
        .map_err(AnalyzerError::Query)?;

    Ok(rows.iter().map(PlanRow::from_mysql_row).collect())
}
