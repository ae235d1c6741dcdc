//! Raw tab-separated output.

use crate::error::Result;
use crate::format::Output;

/// Format an output as tab-separated lines, one per row, without headers.
///
/// A query message is not part of the raw output; the caller reports it.
pub fn format_raw(output: &Output) -> Result<String> {
    let lines: Vec<String> = match output {
        Output::Rows { result, .. } => result.rows.iter().map(|row| row.join("\t")).collect(),
        Output::Stats(stats) => {
            let optional = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_default();
            let mut lines = vec![
                format!("total_people\t{}", stats.total_people),
                format!("celebrities\t{}", stats.celebrities),
                format!("connections\t{}", stats.connections),
                format!("unique_groups\t{}", stats.unique_groups),
                format!("followers_total\t{}", stats.followers.total),
                format!("followers_average\t{}", optional(stats.followers.average)),
                format!("followers_max\t{}", optional(stats.followers.max)),
                format!("followers_min\t{}", optional(stats.followers.min)),
            ];
            lines.extend(
                stats
                    .top_interests
                    .iter()
                    .map(|c| format!("interest\t{}\t{}", c.hobby, c.count)),
            );
            lines
        }
    };
    Ok(lines.join("\n"))
}
