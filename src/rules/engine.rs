use crate::plan::PlanRow;

/// Rows examined at a single step above which the scan itself is flagged.
const LARGE_SCAN_ROW_THRESHOLD: u64 = 10_000;

/// Rows examined by the first joined table above which join order is flagged.
const JOIN_ORDER_ROW_THRESHOLD: u64 = 1_000;

/// Outcome of evaluating a plan. Both lists grow strictly in the order rules
/// fire; nothing is deduplicated or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub problems: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Evaluate every rule against the plan, in plan order.
///
/// Per-row rules run first, in a fixed order for each row; the join-order
/// check runs after all rows; the "no issues" fallback suggestion is appended
/// only when no rule produced a problem.
pub fn evaluate(plan: &[PlanRow]) -> Analysis {
    let mut analysis = Analysis::default();

    for row in plan {
        evaluate_row(row, &mut analysis);
    }

    // Join-order cost is a property of the join's starting point, so only the
    // first plan row is inspected, and only for multi-table plans.
    if plan.len() > 1 {
        let first_table_rows = plan[0].rows_estimate.unwrap_or(0);
        if first_table_rows > JOIN_ORDER_ROW_THRESHOLD {
            analysis
                .problems
                .push("Potential suboptimal join order".to_string());
            analysis.suggestions.push(format!(
                "The first table in the join order scans {} rows. \
                 Consider reordering tables in your JOIN to start with the most selective table.",
                group_thousands(first_table_rows)
            ));
        }
    }

    if analysis.problems.is_empty() {
        analysis.suggestions.push(
            "No obvious performance issues detected. Query appears to be well-optimized."
                .to_string(),
        );
    }

    analysis
}

fn evaluate_row(row: &PlanRow, analysis: &mut Analysis) {
    let table = row.table_name();
    let access_type = row.access_type.as_deref().unwrap_or("");
    // Substring matching is deliberately case-sensitive and exact: these are
    // the literal annotations MySQL emits in the Extra column.
    let extra = row.extra.as_deref().unwrap_or("");
    let rows = row.rows_estimate.unwrap_or(0);

    if access_type == "ALL" {
        analysis
            .problems
            .push(format!("Full Table Scan on table '{table}'"));
        analysis.suggestions.push(format!(
            "A full table scan was detected on table '{table}'. \
             Consider adding an index on the column(s) used in your WHERE or ON clauses."
        ));
    }

    if row.key.is_none() && access_type != "ALL" && access_type != "index" {
        analysis
            .problems
            .push(format!("No index used for table '{table}'"));
        analysis.suggestions.push(format!(
            "The query did not use an index for table '{table}'. \
             Review your WHERE clause and consider adding an appropriate index."
        ));
    }

    if extra.contains("Using filesort") {
        analysis
            .problems
            .push(format!("Using filesort for table '{table}'"));
        analysis.suggestions.push(format!(
            "The query is using a filesort operation on table '{table}'. \
             Consider adding an index on the column(s) in your ORDER BY clause."
        ));
    }

    if extra.contains("Using temporary") {
        analysis
            .problems
            .push(format!("Using temporary table for '{table}'"));
        analysis.suggestions.push(format!(
            "The query is creating a temporary table for '{table}'. \
             This is often caused by GROUP BY or UNION. Review your query logic or \
             ensure columns in GROUP BY are indexed."
        ));
    }

    if extra.contains("Using where") && row.key.is_none() {
        analysis
            .problems
            .push(format!("Unindexed WHERE clause on table '{table}'"));
        analysis.suggestions.push(format!(
            "The WHERE clause on table '{table}' is not using an index. \
             This will significantly slow down the query. Add an index on the filtered columns."
        ));
    }

    if rows > LARGE_SCAN_ROW_THRESHOLD {
        let grouped = group_thousands(rows);
        analysis.problems.push(format!(
            "Large number of rows scanned ({grouped}) on table '{table}'"
        ));
        analysis.suggestions.push(format!(
            "Table '{table}' is scanning {grouped} rows. \
             This indicates a potential performance bottleneck. \
             Consider adding more selective indexes or refining your WHERE conditions."
        ));
    }
}

/// Format an integer with comma thousands separators: 50000 -> "50,000".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
