//! Console rendering of the analysis report.
//!
//! Two renderers implement one capability: `table` draws the plan with
//! comfy-table, `plain` emits a width-padded text table for dumb terminals
//! and log capture. The choice is made once at startup from the `--plain`
//! flag; the core never sees which one is in use.

pub mod plain;
pub mod table;

use crate::report::Report;
use crate::rules::group_thousands;

pub trait Renderer {
    fn render(&self, report: &Report);
}

pub fn for_mode(plain: bool) -> Box<dyn Renderer> {
    if plain {
        Box::new(plain::PlainRenderer)
    } else {
        Box::new(table::TableRenderer)
    }
}

/// Shared trailer: problems as warning bullets (or a checkmark when clean),
/// suggestions as a numbered list.
fn push_findings(out: &mut String, report: &Report) {
    out.push_str("\nProblems Detected:\n");
    if report.analysis.problems.is_empty() {
        out.push_str("  ✓ No issues found!\n");
    } else {
        for problem in &report.analysis.problems {
            out.push_str(&format!("  [WARNING] {problem}\n"));
        }
    }

    out.push_str("\nOptimization Suggestions:\n");
    for (idx, suggestion) in report.analysis.suggestions.iter().enumerate() {
        out.push_str(&format!("  {}. {suggestion}\n", idx + 1));
    }
}

/// Shared header: the query and its measurements.
fn push_summary(out: &mut String, report: &Report) {
    out.push_str("\nOriginal Query:\n");
    out.push_str(&format!("  {}\n\n", report.query));
    out.push_str(&format!(
        "Execution Time: {:.2} ms\n",
        report.execution_time_ms
    ));
    out.push_str(&format!(
        "Rows Returned: {}\n",
        group_thousands(report.row_count as u64)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanRow;
    use crate::rules::Analysis;

    pub(super) fn sample_report() -> Report {
        Report {
            query: "SELECT * FROM users".to_string(),
            execution_time_ms: 12.345,
            row_count: 50_000,
            plan: vec![PlanRow {
                table: Some("users".to_string()),
                select_type: Some("SIMPLE".to_string()),
                access_type: Some("ALL".to_string()),
                key: None,
                extra: None,
                rows_estimate: Some(50_000),
            }],
            analysis: Analysis {
                problems: vec!["Full Table Scan on table 'users'".to_string()],
                suggestions: vec!["Add an index.".to_string()],
            },
        }
    }

    #[test]
    fn test_summary_formats_time_and_rows() {
        let mut out = String::new();
        push_summary(&mut out, &sample_report());
        assert!(out.contains("Execution Time: 12.35 ms"));
        assert!(out.contains("Rows Returned: 50,000"));
        assert!(out.contains("SELECT * FROM users"));
    }

    #[test]
    fn test_findings_with_problems() {
        let mut out = String::new();
        push_findings(&mut out, &sample_report());
        assert!(out.contains("[WARNING] Full Table Scan on table 'users'"));
        assert!(out.contains("1. Add an index."));
        assert!(!out.contains("No issues found"));
    }

    #[test]
    fn test_findings_when_clean() {
        let mut report = sample_report();
        report.analysis = Analysis {
            problems: vec![],
            suggestions: vec!["No obvious performance issues detected.".to_string()],
        };
        let mut out = String::new();
        push_findings(&mut out, &report);
        assert!(out.contains("✓ No issues found!"));
        assert!(out.contains("1. No obvious performance issues detected."));
    }

    #[test]
    fn test_for_mode_selects_renderer() {
        // Smoke test: both modes hand back a usable renderer.
        for_mode(true).render(&sample_report());
        for_mode(false).render(&sample_report());
    }
}
