//! # Table Rendering
//!
//! Lays out one [`Page`] of the phonebook as a fixed-width text table:
//! header, rule, rows, rule, then a `Page P of T` footer.
//!
//! Column widths are measured in terminal cells with `unicode-width`, so names
//! written in Cyrillic or CJK line up with ASCII ones. Values longer than their
//! column are not truncated; they push the rest of the row right.

use phonebook::api::Page;
use phonebook::index::DisplayRecord;
use phonebook::model::{Field, Record};
use unicode_width::UnicodeWidthStr;

pub const RULE_WIDTH: usize = 130;
pub const EMPTY_MESSAGE: &str = "No records.";

pub fn render_table(page: &Page) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&row_line(Field::ALL.iter().map(|f| f.label())));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    if page.total_pages == 0 {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    for row in &page.rows {
        out.push_str(&record_line(&row.record));
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Page {} of {}\n", page.number, page.total_pages));
    out
}

/// One line per match: `N. surname, first name, ...`
pub fn render_matches(rows: &[DisplayRecord]) -> String {
    rows.iter()
        .map(|dr| {
            let values: Vec<String> = dr.record.values().map(single_line).collect();
            format!("{}. {}\n", dr.position, values.join(", "))
        })
        .collect()
}

fn record_line(record: &Record) -> String {
    let values: Vec<String> = record.values().map(single_line).collect();
    row_line(values.iter().map(String::as_str))
}

fn row_line<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::new();
    for (field, value) in Field::ALL.iter().zip(values) {
        line.push_str(&pad_to_width(value, field.width()));
    }
    line
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
