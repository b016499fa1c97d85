//! Table builder wrapper around comfy-table for consistent list display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

/// Create a standard list table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Render the table to string with a count header.
pub fn render_list(entity_name: &str, table: &Table, total: usize) -> String {
    if total == 0 {
        return format!("No {entity_name}s found.");
    }
    let noun = if total == 1 {
        entity_name.to_string()
    } else {
        format!("{entity_name}s")
    };
    format!("{} {noun}:\n{table}", console::style(total).bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_list() {
        let table = list_table(&["Group", "Site"]);
        assert_eq!(render_list("missing build", &table, 0), "No missing builds found.");
    }

    #[test]
    fn test_render_list_has_rows() {
        let mut table = list_table(&["Group", "Site"]);
        table.add_row(vec!["Nightly", "host1"]);
        table.add_row(vec!["Nightly", "host2"]);
        let rendered = render_list("missing build", &table, 2);
        assert!(rendered.contains("missing builds:"));
        assert!(rendered.contains("GROUP"));
        assert!(rendered.contains("host2"));
    }
}
