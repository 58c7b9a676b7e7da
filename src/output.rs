//! Output rendering for merge and report commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries
//! per-source counts and a top-level total so orchestration scripts can
//! consume it without scraping the human text. Warnings always go to
//! stderr, in both modes.

use crate::models::MergeSummary;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print merge results in the requested format.
pub fn print_merge(summary: &MergeSummary, output: &str, warnings: &[String]) {
    for w in warnings {
        eprintln!("{} {}", utils::warn_prefix(), w);
    }
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_merge_json(summary, warnings)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for s in &summary.sources {
                println!("loaded {} defects from {}", s.count, s.name);
            }
            let line = format!(
                "merged {} defects from {} agents -> {}",
                summary.total, summary.agents, summary.artifact
            );
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Print the report confirmation with the row count the renderer returned.
pub fn print_report(rows: usize, path: &str, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&json!({"rows": rows, "output": path})).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            if color {
                println!(
                    "{} wrote {} defects to {}",
                    "✔".green().bold(),
                    rows,
                    path.bold()
                );
            } else {
                println!("wrote {} defects to {}", rows, path);
            }
        }
    }
}

/// Compose the merge JSON object (pure) for testing/snapshot purposes.
pub fn compose_merge_json(summary: &MergeSummary, warnings: &[String]) -> JsonVal {
    json!({
        "sources": summary.sources,
        "agents": summary.agents,
        "total": summary.total,
        "artifact": summary.artifact,
        "warnings": warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceReport;

    #[test]
    fn test_compose_merge_json_shape() {
        let summary = MergeSummary {
            sources: vec![
                SourceReport {
                    name: "role_01_agent_a.json".into(),
                    count: 2,
                },
                SourceReport {
                    name: "role_01_agent_b.json".into(),
                    count: 0,
                },
            ],
            agents: 2,
            total: 2,
            artifact: "role_01_defects.json".into(),
        };
        let warnings = vec!["could not parse role_01_agent_b.json (12 bytes)".into()];
        let out = compose_merge_json(&summary, &warnings);
        assert_eq!(out["total"], 2);
        assert_eq!(out["agents"], 2);
        assert_eq!(out["sources"][0]["count"], 2);
        assert_eq!(out["sources"][1]["name"], "role_01_agent_b.json");
        assert_eq!(out["warnings"][0], warnings[0]);
        assert_eq!(out["artifact"], "role_01_defects.json");
    }
}
