//! HTML report tables.
//!
//! [`render_html_table`] is a column-spec driven renderer over JSON-object
//! rows. [`render_summary_table`] sorts and limits rows first and puts the
//! total count in the title, which is what the report pages use.

use std::cmp::Ordering;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::errors::DomainResult;

/// One table row: column key → cell value.
pub type TableRow = Map<String, Value>;

/// Default CSS: bordered cells and zebra-striped rows.
pub const DEFAULT_TABLE_CSS: &str = "table, th, td {
  padding: 5px;
  border: 1px solid black;
  border-collapse: collapse;
}
tr:nth-child(even) {background-color: #eee;}
tr:nth-child(odd) {background-color: #fff;}
";

/// Default attributes placed inside the `<table>` tag.
pub const DEFAULT_TABLE_ATTRS: &str = "style=\"width:100%\"";

/// Horizontal alignment of a data cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl CellAlign {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Column definition: which row key to show, under which header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub key: String,
    pub header: String,
    #[serde(default)]
    pub align: CellAlign,
}

impl TableColumn {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            align: CellAlign::Left,
        }
    }

    #[must_use]
    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }
}

/// Page-level styling for a rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Content of the `<style>` block.
    pub css: String,
    /// Raw attributes inside the `<table ...>` tag.
    pub table_attrs: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            css: DEFAULT_TABLE_CSS.to_string(),
            table_attrs: DEFAULT_TABLE_ATTRS.to_string(),
        }
    }
}

/// Convert serializable records into table rows.
///
/// Records that do not serialize to a JSON object become empty rows.
pub fn rows_from<T: Serialize>(items: &[T]) -> DomainResult<Vec<TableRow>> {
    items
        .iter()
        .map(|item| -> DomainResult<TableRow> {
            match serde_json::to_value(item)? {
                Value::Object(map) => Ok(map),
                _ => Ok(TableRow::new()),
            }
        })
        .collect()
}

/// Escape text for use in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Natural text of a cell: strings unquoted, missing and null cells empty.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render `rows` as an HTML table with a title heading.
///
/// Column order, header text and per-column alignment come from `columns`.
/// A row lacking a column's key renders an empty cell.
pub fn render_html_table(
    title: &str,
    columns: &[TableColumn],
    rows: &[TableRow],
    style: &TableStyle,
) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<style>{}</style>", style.css);
    let _ = writeln!(html, "<h3>{}</h3>", escape_html(title));
    let _ = writeln!(html, "<table {}>", style.table_attrs);
    html.push('\n');

    html.push_str("<tr>\n");
    for column in columns {
        let _ = writeln!(html, "<th>{}</th>", escape_html(&column.header));
    }
    html.push_str("</tr>\n\n");

    for row in rows {
        html.push_str("<tr>\n");
        for column in columns {
            let _ = writeln!(
                html,
                "<td align=\"{}\">{}</td>",
                column.align.as_str(),
                escape_html(&cell_text(row.get(&column.key)))
            );
        }
        html.push_str("</tr>\n\n");
    }

    html.push_str("</table>\n");
    html
}

/// Row selection and title policy for a summary table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTableSpec {
    /// Table title, e.g. `Builds Missing`.
    pub title: String,
    /// Short count label shown as `<acronym>=<total>`, e.g. `bm`.
    pub count_acronym: String,
    /// Keys to sort by, most significant first. Empty keeps input order.
    pub sort_keys: Vec<String>,
    /// Maximum number of rows displayed.
    pub limit: Option<usize>,
}

impl SummaryTableSpec {
    pub fn new(title: impl Into<String>, count_acronym: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            count_acronym: count_acronym.into(),
            sort_keys: Vec::new(),
            limit: None,
        }
    }

    #[must_use]
    pub fn sort_by<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a.and_then(Value::as_f64), b.and_then(Value::as_f64)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => cell_text(a).cmp(&cell_text(b)),
    }
}

fn compare_rows(a: &TableRow, b: &TableRow, keys: &[String]) -> Ordering {
    keys.iter()
        .map(|key| compare_cells(a.get(key), b.get(key)))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sort, limit and render rows as a summary table.
///
/// Returns an empty string when there are no rows. The title carries the total
/// row count, and a `(limited to N)` note when rows were dropped.
pub fn render_summary_table(
    spec: &SummaryTableSpec,
    columns: &[TableColumn],
    rows: &[TableRow],
    style: &TableStyle,
) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut selected: Vec<&TableRow> = rows.iter().collect();
    if !spec.sort_keys.is_empty() {
        selected.sort_by(|a, b| compare_rows(a, b, &spec.sort_keys));
    }

    let mut title = spec.title.clone();
    if let Some(limit) = spec.limit.filter(|&limit| limit < rows.len()) {
        selected.truncate(limit);
        let _ = write!(title, " (limited to {limit})");
    }
    let _ = write!(title, ": {}={}", spec.count_acronym, rows.len());

    let displayed: Vec<TableRow> = selected.into_iter().cloned().collect();
    render_html_table(&title, columns, &displayed, style)
}
