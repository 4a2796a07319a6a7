//! Shared helpers for command handlers: player resolution and table output.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::{
    cli::types::{PlayerId, Season},
    nba::{
        client::StatsClient,
        types::{Player, StatTable},
    },
    Result,
};

/// Read a metric from an aggregate map, treating a missing key as zero.
pub fn metric(stats: &BTreeMap<String, f64>, key: &str) -> f64 {
    stats.get(key).copied().unwrap_or(0.0)
}

/// Resolve a `--player` argument: numeric ids pass through untouched,
/// anything else is looked up on the active roster.
pub async fn resolve_player(client: &StatsClient, spec: &str, season: Season) -> Result<Player> {
    if let Ok(id) = spec.trim().parse::<u64>() {
        return Ok(Player {
            id: PlayerId::new(id),
            full_name: format!("#{id}"),
        });
    }
    client.find_player(spec, season).await
}

/// Render a cell for text output; nulls come out blank.
pub fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Print a result table with columns padded to their widest cell.
pub fn print_table(table: &StatTable) {
    if table.is_empty() {
        println!("(no rows)");
        return;
    }

    let mut widths: Vec<usize> = table.headers.iter().map(String::len).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let header_line: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(0);
                format!("{:<width$}", cell, width = width)
            })
            .collect();
        println!("{}", line.join("  "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metric_defaults_missing_keys_to_zero() {
        let stats = BTreeMap::from([("ppg".to_string(), 27.5)]);
        assert_eq!(metric(&stats, "ppg"), 27.5);
        assert_eq!(metric(&stats, "rpg"), 0.0);
    }

    #[test]
    fn cell_text_renders_common_shapes() {
        assert_eq!(cell_text(&json!("LAL")), "LAL");
        assert_eq!(cell_text(&json!(31)), "31");
        assert_eq!(cell_text(&json!(0.512)), "0.512");
        assert_eq!(cell_text(&Value::Null), "");
    }
}
