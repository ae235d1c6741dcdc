//! Pretty terminal output with colors and tables.

use crate::analytics::{Analytics, FollowerStats};
use crate::cli::Args;
use crate::error::Result;
use crate::format::Output;
use crate::query::{QueryResult, group_thousands};
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets};

/// Headers whose values are numbers.
const NUMERIC_COLUMNS: &[&str] = &["ID", "FRND_ID", "FOLL", "ROWS", "COUNT"];

/// Format an output as pretty terminal output.
pub fn format_pretty(output: &Output, args: &Args) -> Result<String> {
    if args.no_color {
        colored::control::set_override(false);
    }

    match output {
        Output::Rows { title, result } => format_rows(title.as_deref(), result, args),
        Output::Stats(stats) => format_stats(stats, args),
    }
}

/// Format a titled result table with its message, if any.
fn format_rows(title: Option<&str>, result: &QueryResult, args: &Args) -> Result<String> {
    let mut output = String::new();

    if let Some(title) = title {
        output.push_str(&format!(
            "{} ({})\n",
            title.bold().cyan(),
            result.len()
        ));
    }

    if result.is_empty() {
        if result.message.is_none() {
            output.push_str(&format!("  {}\n", "(no rows)".dimmed()));
        }
    } else {
        let headers: Vec<&str> = result.columns.iter().map(String::as_str).collect();
        output.push_str(&render_table(&headers, &result.rows, args));
    }

    if let Some(message) = &result.message {
        output.push_str(&format!("  {}\n", message.yellow()));
    }

    Ok(output.trim_end().to_string())
}

/// Format the analytics summary.
fn format_stats(stats: &Analytics, args: &Args) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Summary".bold().cyan()));
    output.push_str(&format!(
        "  {} {}\n",
        "Total people:".dimmed(),
        stats.total_people
    ));
    output.push_str(&format!(
        "  {} {}\n",
        "Celebrities:".dimmed(),
        stats.celebrities
    ));
    output.push_str(&format!(
        "  {} {}\n",
        "Connections:".dimmed(),
        stats.connections
    ));
    output.push_str(&format!(
        "  {} {}\n\n",
        "Friend groups:".dimmed(),
        stats.unique_groups
    ));

    output.push_str(&format!("{}\n", "Followers".bold().cyan()));
    output.push_str(&format_followers(&stats.followers));
    output.push('\n');

    output.push_str(&format!(
        "{} ({})\n",
        "Top interests".bold().cyan(),
        stats.top_interests.len()
    ));
    if stats.top_interests.is_empty() {
        output.push_str(&format!("  {}\n", "(empty)".dimmed()));
    } else {
        let rows: Vec<Vec<String>> = stats
            .top_interests
            .iter()
            .map(|c| vec![c.hobby.clone(), c.count.to_string()])
            .collect();
        output.push_str(&render_table(&["HOBBY", "COUNT"], &rows, args));
    }

    Ok(output.trim_end().to_string())
}

fn format_followers(followers: &FollowerStats) -> String {
    let optional = |v: Option<u64>| {
        v.map(group_thousands)
            .unwrap_or_else(|| "-".dimmed().to_string())
    };
    let mut output = String::new();
    output.push_str(&format!(
        "  {} {}\n",
        "Total:".dimmed(),
        group_thousands(followers.total)
    ));
    output.push_str(&format!(
        "  {} {}\n",
        "Average:".dimmed(),
        optional(followers.average)
    ));
    output.push_str(&format!(
        "  {} {}\n",
        "Max:".dimmed(),
        optional(followers.max)
    ));
    output.push_str(&format!(
        "  {} {}\n",
        "Min:".dimmed(),
        optional(followers.min)
    ));
    output
}

/// Render rows under the given headers.
fn render_table(headers: &[&str], rows: &[Vec<String>], args: &Args) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if args.no_color {
        table.force_no_tty();
    }
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(comfy_table::Color::DarkGrey))
            .collect::<Vec<_>>(),
    );

    for row in rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }

    for (idx, header) in headers.iter().enumerate() {
        if NUMERIC_COLUMNS.contains(header) {
            if let Some(column) = table.column_mut(idx) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    format!("{}\n", table)
}
