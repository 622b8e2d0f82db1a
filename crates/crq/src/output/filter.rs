//! Filter output formatting: trees, WHERE clauses, and token dumps.

use criteria_rs::filter::{Filter, FilterError, Node, PositionedToken, Value};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_condition, format_heading, format_value, token_kind, value_type};

/// JSON output structure for the sql command.
#[derive(Serialize)]
pub struct SqlOutput<'a> {
    #[serde(rename = "where")]
    pub where_clause: &'a str,
    pub args: &'a [Value],
}

/// JSON output structure for a single token.
#[derive(Serialize)]
pub struct TokenOutput {
    pub position: usize,
    pub kind: &'static str,
    pub text: String,
}

/// JSON output structure for the tokens command.
#[derive(Serialize)]
pub struct TokensOutput<'a> {
    pub input: &'a str,
    pub tokens: Vec<TokenOutput>,
    pub postfix: Vec<String>,
    pub errors: Vec<String>,
}

/// Formats a filter tree as JSON.
pub fn format_filter_json(filter: &Filter) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(filter)
}

/// Formats a filter as an indented tree.
pub fn format_filter_tree(filter: &Filter, use_colors: bool) -> String {
    if filter.is_empty() {
        return "(empty filter: matches every row)\n".to_string();
    }

    let mut output = String::new();
    if filter.operator.is_empty() {
        // A lone condition has nothing to group under.
        for node in &filter.conditions {
            write_node(&mut output, node, "", use_colors);
        }
    } else {
        output.push_str(&format_heading(filter.operator.as_str(), use_colors));
        output.push('\n');
        write_children(&mut output, &filter.conditions, "", use_colors);
    }
    output
}

fn write_children(output: &mut String, nodes: &[Node], prefix: &str, use_colors: bool) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let (branch, indent) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };
        output.push_str(prefix);
        output.push_str(branch);
        write_node(output, node, &format!("{prefix}{indent}"), use_colors);
    }
}

fn write_node(output: &mut String, node: &Node, prefix: &str, use_colors: bool) {
    match node {
        Node::Raw(fragment) => {
            let label = if use_colors {
                "raw:".dimmed().to_string()
            } else {
                "raw:".to_string()
            };
            output.push_str(&format!("{label} {fragment}\n"));
        }
        Node::Condition(condition) => {
            output.push_str(&format_condition(condition, use_colors));
            output.push('\n');
        }
        Node::Filter(filter) if filter.operator.is_empty() => {
            output.push_str("(group)\n");
            write_children(output, &filter.conditions, prefix, use_colors);
        }
        Node::Filter(filter) => {
            output.push_str(&format_heading(filter.operator.as_str(), use_colors));
            output.push('\n');
            write_children(output, &filter.conditions, prefix, use_colors);
        }
    }
}

/// Formats a WHERE clause and its arguments as JSON.
pub fn format_sql_json(where_clause: &str, args: &[Value]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SqlOutput { where_clause, args })
}

/// Formats a WHERE clause and its arguments as text.
pub fn format_sql_text(where_clause: &str, args: &[Value], use_colors: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {}\n",
        format_heading("WHERE:", use_colors),
        if where_clause.is_empty() { "(none)" } else { where_clause }
    ));
    output.push_str(&format_args_list(args, use_colors));
    output
}

/// Formats positional arguments as a numbered list.
pub fn format_args_list(args: &[Value], use_colors: bool) -> String {
    let mut output = format_heading("Args:", use_colors);
    if args.is_empty() {
        output.push_str(" (none)\n");
        return output;
    }
    output.push('\n');
    for (i, arg) in args.iter().enumerate() {
        output.push_str(&format!(
            "  {}: {} ({})\n",
            i + 1,
            format_value(arg, use_colors),
            value_type(arg)
        ));
    }
    output
}

/// Formats the stages of the filter pipeline as JSON.
pub fn format_tokens_json(
    input: &str,
    tokens: &[PositionedToken],
    postfix: &[PositionedToken],
    errors: &[FilterError],
) -> Result<String, serde_json::Error> {
    let output = TokensOutput {
        input,
        tokens: tokens
            .iter()
            .map(|t| TokenOutput {
                position: t.position,
                kind: token_kind(&t.token),
                text: t.token.to_string(),
            })
            .collect(),
        postfix: postfix.iter().map(|t| t.token.to_string()).collect(),
        errors: errors.iter().map(ToString::to_string).collect(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats the stages of the filter pipeline as a table.
pub fn format_tokens_table(
    input: &str,
    tokens: &[PositionedToken],
    postfix: &[PositionedToken],
    errors: &[FilterError],
    use_colors: bool,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} {}\n\n", format_heading("Input:", use_colors), input));

    if tokens.is_empty() {
        output.push_str("No tokens.\n");
        return output;
    }

    let header = format!("{:<5} {:<11} {}", "Pos", "Kind", "Token");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }
    for t in tokens {
        let line = format!("{:<5} {:<11} {}", t.position, token_kind(&t.token), t.token);
        output.push_str(&line);
        output.push('\n');
    }

    let postfix: Vec<String> = postfix.iter().map(|t| t.token.to_string()).collect();
    output.push_str(&format!(
        "\n{} {}\n",
        format_heading("Postfix:", use_colors),
        postfix.join(" ")
    ));

    for err in errors {
        let line = format!("warning: {err}");
        if use_colors {
            output.push_str(&format!("{}\n", line.yellow()));
        } else {
            output.push_str(&line);
            output.push('\n');
        }
    }
    output
}
