//! Sort and criteria output formatting.

use criteria_rs::filter::Value;
use criteria_rs::{Criteria, Order, SortBy};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::filter::{format_args_list, format_filter_tree};
use super::helpers::{format_column, format_heading};

/// JSON output structure for the sort command.
#[derive(Serialize)]
pub struct SortOutput<'a> {
    pub sort_by: &'a SortBy,
    pub order_by: String,
}

/// JSON output structure for the criteria command.
#[derive(Serialize)]
pub struct CriteriaOutput<'a> {
    pub criteria: &'a Criteria,
    #[serde(rename = "where")]
    pub where_clause: &'a str,
    pub args: &'a [Value],
    pub order_by: String,
    pub offset: u64,
    pub size: u64,
}

/// Formats sort keys as JSON.
pub fn format_sort_json(sort_by: &SortBy) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SortOutput {
        sort_by,
        order_by: sort_by.to_string(),
    })
}

/// Formats sort keys as a numbered list.
pub fn format_sort_table(sort_by: &SortBy, use_colors: bool) -> String {
    if sort_by.is_empty() {
        return "No sort keys.\n".to_string();
    }

    let mut output = String::new();
    for (i, sort) in sort_by.iter().enumerate() {
        let order = match (sort.order, use_colors) {
            (Order::Asc, true) => sort.order.green().to_string(),
            (Order::Desc, true) => sort.order.magenta().to_string(),
            (_, false) => sort.order.to_string(),
        };
        output.push_str(&format!(
            "{}. {} {}\n",
            i + 1,
            format_column(&sort.column, use_colors),
            order
        ));
    }
    output
}

/// Formats criteria as JSON, together with the compiled clause.
pub fn format_criteria_json(
    criteria: &Criteria,
    where_clause: &str,
    args: &[Value],
    default_size: u64,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CriteriaOutput {
        criteria,
        where_clause,
        args,
        order_by: criteria.sort_by.to_string(),
        offset: criteria.offset(),
        size: criteria.size(default_size),
    })
}

/// Formats criteria as text sections.
pub fn format_criteria_text(
    criteria: &Criteria,
    where_clause: &str,
    args: &[Value],
    default_size: u64,
    use_colors: bool,
) -> String {
    let mut output = String::new();
    output.push_str(&format_heading("Filter:", use_colors));
    output.push('\n');
    output.push_str(&format_filter_tree(&criteria.filter, use_colors));
    output.push('\n');

    let rows = [
        ("WHERE:", or_none(where_clause.to_string())),
        ("ORDER BY:", or_none(criteria.sort_by.to_string())),
        ("OFFSET:", criteria.offset().to_string()),
        ("LIMIT:", criteria.size(default_size).to_string()),
    ];
    for (label, value) in rows {
        output.push_str(&format!("{} {}\n", format_heading(&format!("{label:<9}"), use_colors), value));
    }
    output.push_str(&format_args_list(args, use_colors));
    output
}

fn or_none(text: String) -> String {
    if text.is_empty() {
        "(none)".to_string()
    } else {
        text
    }
}
