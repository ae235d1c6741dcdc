//! JSON output formatting.

use crate::error::{Error, Result};
use crate::format::Output;

/// Format an output as JSON.
pub fn format_json(output: &Output) -> Result<String> {
    let rendered = match output {
        Output::Rows { result, .. } => serde_json::to_string_pretty(result),
        Output::Stats(stats) => serde_json::to_string_pretty(stats),
    };
    rendered.map_err(|e| Error::FormatError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Analytics;
    use crate::model::Snapshot;
    use crate::query::{QueryIssue, QueryResult};

    #[test]
    fn test_format_rows() {
        let output = Output::Rows {
            title: None,
            result: QueryResult::new(&["NAME", "FOLL"], vec![vec!["vivek".into(), "342".into()]]),
        };
        let value: serde_json::Value = serde_json::from_str(&format_json(&output).unwrap()).unwrap();
        assert_eq!(value["columns"], serde_json::json!(["NAME", "FOLL"]));
        assert_eq!(value["rows"][0][1], "342");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_format_message() {
        let output = Output::Rows {
            title: None,
            result: QueryResult::missing(&["NAME"], QueryIssue::PersonNotFound("nobody".into())),
        };
        let json = format_json(&output).unwrap();
        assert!(json.contains("\"message\": \"Person nobody not found\""));
    }

    #[test]
    fn test_format_stats() {
        let output = Output::Stats(Analytics::compute(&Snapshot::seed()));
        let value: serde_json::Value = serde_json::from_str(&format_json(&output).unwrap()).unwrap();
        assert_eq!(value["total_people"], 23);
        assert_eq!(value["followers"]["max"], 429_000_000);
    }
}
