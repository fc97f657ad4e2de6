//! Report assembly: the full analysis pipeline for one query.

use sqlx::MySqlPool;
use tracing::debug;

use crate::error::Result;
use crate::plan::PlanRow;
use crate::query::{explain, read};
use crate::rules::{self, Analysis};

/// Everything a renderer needs. Built once per run, read-only afterwards.
#[derive(Debug)]
pub struct Report {
    pub query: String,
    pub execution_time_ms: f64,
    pub row_count: usize,
    pub plan: Vec<PlanRow>,
    pub analysis: Analysis,
}

/// Run the pipeline: time the query, fetch its plan, evaluate the rules.
///
/// No retries — a failure at any stage aborts the run and propagates to the
/// caller, which still owns session release.
pub async fn analyze(pool: &MySqlPool, query: &str) -> Result<Report> {
    let timing = read::measure(pool, query).await?;
    debug!(
        execution_time_ms = timing.execution_time_ms,
        row_count = timing.row_count,
        "query measured"
    );

    let plan = explain::fetch_plan(pool, query).await?;
    debug!(plan_rows = plan.len(), "EXPLAIN plan fetched");

    let analysis = rules::evaluate(&plan);
    debug!(
        problems = analysis.problems.len(),
        suggestions = analysis.suggestions.len(),
        "plan evaluated"
    );

    Ok(Report {
        query: query.to_string(),
        execution_time_ms: timing.execution_time_ms,
        row_count: timing.row_count,
        plan,
        analysis,
    })
}
