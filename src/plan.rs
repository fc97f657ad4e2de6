//! One row of a MySQL `EXPLAIN` plan.

use sqlx::mysql::MySqlRow;
use sqlx::Row;

/// Substituted wherever a plan row has no table name.
pub const UNKNOWN_TABLE: &str = "unknown";

/// The recognized EXPLAIN columns, in display order. MySQL emits more
/// (id, partitions, possible_keys, key_len, ref, filtered); those are
/// discarded at the driver boundary.
pub const COLUMNS: [&str; 6] = ["table", "select_type", "type", "key", "rows", "Extra"];

/// An immutable snapshot of one step of a query plan, in the engine's
/// join/step order. The first row is the first table processed in a join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRow {
    /// Table this step touches.
    pub table: Option<String>,
    /// Plan step classification (SIMPLE, PRIMARY, SUBQUERY, ...).
    pub select_type: Option<String>,
    /// Access method. `"ALL"` is a full table scan, `"index"` a full index scan.
    pub access_type: Option<String>,
    /// Index chosen by the optimizer, if any.
    pub key: Option<String>,
    /// Free-text annotations ("Using filesort", "Using temporary", "Using where", ...).
    pub extra: Option<String>,
    /// Estimated rows examined at this step.
    pub rows_estimate: Option<u64>,
}

impl PlanRow {
    /// Decode the recognized columns from a classic `EXPLAIN` result row.
    /// Missing or NULL columns become `None`.
    pub fn from_mysql_row(row: &MySqlRow) -> Self {
        Self {
            table: text_column(row, "table"),
            select_type: text_column(row, "select_type"),
            access_type: text_column(row, "type"),
            key: text_column(row, "key"),
            extra: text_column(row, "Extra"),
            rows_estimate: rows_column(row),
        }
    }

    /// Table name for display, falling back to the literal `unknown`.
    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(UNKNOWN_TABLE)
    }

    /// The recognized columns as display strings, matching [`COLUMNS`] order.
    pub fn column_values(&self) -> [String; 6] {
        [
            self.table.clone().unwrap_or_default(),
            self.select_type.clone().unwrap_or_default(),
            self.access_type.clone().unwrap_or_default(),
            self.key.clone().unwrap_or_default(),
            self.rows_estimate.map(|n| n.to_string()).unwrap_or_default(),
            self.extra.clone().unwrap_or_default(),
        ]
    }
}

fn text_column(row: &MySqlRow, name: &str) -> Option<String> {
    if let Ok(v) = row.try_get::<Option<String>, _>(name) {
        return v;
    }
    // Some server builds report EXPLAIN text columns as binary blobs.
    row.try_get::<Option<Vec<u8>>, _>(name)
        .ok()
        .flatten()
        .and_then(|b| String::from_utf8(b).ok())
}

fn rows_column(row: &MySqlRow) -> Option<u64> {
    if let Ok(v) = row.try_get::<Option<u64>, _>("rows") {
        return v;
    }
    row.try_get::<Option<i64>, _>("rows")
        .ok()
        .flatten()
        .and_then(|n| u64::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_fallback() {
        let row = PlanRow::default();
        assert_eq!(row.table_name(), "unknown");

        let row = PlanRow {
            table: Some("users".to_string()),
            ..Default::default()
        };
        assert_eq!(row.table_name(), "users");
    }

    #[test]
    fn test_column_values_align_with_headers() {
        let row = PlanRow {
            table: Some("orders".to_string()),
            select_type: Some("SIMPLE".to_string()),
            access_type: Some("ref".to_string()),
            key: Some("idx_customer".to_string()),
            extra: Some("Using where".to_string()),
            rows_estimate: Some(20),
        };
        let values = row.column_values();
        assert_eq!(values.len(), COLUMNS.len());
        assert_eq!(values[0], "orders");
        assert_eq!(values[2], "ref");
        assert_eq!(values[4], "20");
        assert_eq!(values[5], "Using where");
    }

    #[test]
    fn test_column_values_blank_when_absent() {
        let values = PlanRow::default().column_values();
        assert!(values.iter().all(String::is_empty));
    }
}
