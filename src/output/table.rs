//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Render rows in a rounded table, or a placeholder line when there are none.
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "No folders found.".to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// Footer line describing how to fetch the next page
pub fn format_next_token(next_token: &str) -> String {
    if next_token.is_empty() {
        "No more pages.".to_string()
    } else {
        format!("Next token: {}  (pass with --token)", next_token)
    }
}
