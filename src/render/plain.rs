use crate::plan::{self, PlanRow};
use crate::report::Report;

use super::{push_findings, push_summary, Renderer};

/// Width-padded text output, matching the recognized EXPLAIN columns.
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, report: &Report) {
        print!("{}", format_report(report));
    }
}

fn format_report(report: &Report) -> String {
    let rule = "=".repeat(80);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\n"));
    out.push_str("SQL QUERY PERFORMANCE ANALYSIS REPORT\n");
    out.push_str(&rule);
    out.push('\n');

    push_summary(&mut out, report);

    out.push_str("\nEXPLAIN Plan:\n");
    if !report.plan.is_empty() {
        push_plan_table(&mut out, &report.plan);
    }

    push_findings(&mut out, report);

    out.push_str(&format!("\n{rule}\n\n"));
    out
}

fn push_plan_table(out: &mut String, rows: &[PlanRow]) {
    let values: Vec<[String; 6]> = rows.iter().map(PlanRow::column_values).collect();

    // Column width: the wider of the header and the widest cell beneath it.
    let widths: Vec<usize> = plan::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, header)| {
            values
                .iter()
                .map(|v| v[i].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line = plan::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!("  {header_line}\n"));
    out.push_str(&format!("  {}\n", "-".repeat(header_line.len())));

    for row in &values {
        let data_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!("  {data_line}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_report;
    use super::*;

    #[test]
    fn test_plain_report_layout() {
        let out = format_report(&sample_report());
        assert!(out.contains("SQL QUERY PERFORMANCE ANALYSIS REPORT"));
        assert!(out.contains("EXPLAIN Plan:"));
        // Header row carries MySQL's native column names.
        assert!(out.contains("select_type"));
        assert!(out.contains("Extra"));
        assert!(out.contains("users"));
    }

    #[test]
    fn test_empty_plan_omits_table() {
        let mut report = sample_report();
        report.plan.clear();
        let out = format_report(&report);
        assert!(out.contains("EXPLAIN Plan:"));
        assert!(!out.contains("select_type"));
    }

    #[test]
    fn test_columns_padded_to_widest_cell() {
        let out = format_report(&sample_report());
        // "table" header is padded to "users" width inside the plan table;
        // every data line separator stays aligned with the header's.
        let lines: Vec<&str> = out
            .lines()
            .filter(|l| l.contains(" | "))
            .collect();
        assert!(lines.len() >= 2);
        let first_sep = lines[0].find('|');
        assert!(lines.iter().all(|l| l.find('|') == first_sep));
    }
}
