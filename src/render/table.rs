use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::plan::{self, PlanRow};
use crate::report::Report;

use super::{push_findings, push_summary, Renderer};

/// Formatted output using comfy-table for the EXPLAIN plan.
pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn render(&self, report: &Report) {
        print!("{}", format_report(report));
    }
}

fn format_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("\n╭──────────────────────────────────────────╮\n");
    out.push_str("│  SQL Query Performance Analysis Report   │\n");
    out.push_str("╰──────────────────────────────────────────╯\n");

    push_summary(&mut out, report);

    out.push_str("\nEXPLAIN Plan:\n");
    if !report.plan.is_empty() {
        out.push_str(&plan_table(&report.plan).to_string());
        out.push('\n');
    }

    push_findings(&mut out, report);
    out.push('\n');
    out
}

fn plan_table(rows: &[PlanRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(plan::COLUMNS);

    for row in rows {
        let values = row.column_values();
        table.add_row(values.iter().enumerate().map(|(i, v)| {
            let cell = Cell::new(v);
            // "rows" column
            if i == 4 {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        }));
    }

    table
}
