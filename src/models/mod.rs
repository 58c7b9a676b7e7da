//! Shared data models for merge/report results and the fixed report schema.

pub mod schema;

use serde::Serialize;
use serde_json::Value;

/// One defect record as extracted from agent output.
///
/// Keys and value shapes stay arbitrary until coerced to display text at
/// render time; `preserve_order` keeps the persisted artifact in input order.
pub type Record = serde_json::Map<String, Value>;

#[derive(Clone)]
/// A review role. Scopes one merge-and-render operation; roles share no
/// identifier sequences or state.
pub struct Role {
    pub number: u32,
    pub name: String,
}

impl Role {
    /// Worksheet title for the final report.
    pub fn sheet_title(&self) -> String {
        format!("Role {} - {}", self.number, self.name)
    }
}

/// Bug id for a 1-based sequence position within a role.
pub fn bug_id(role_number: u32, seq: usize) -> String {
    format!("R{:02}-{:03}", role_number, seq)
}

/// Coerce a field value to display text. Strings pass through, sequences
/// join with newlines in input order, null and absent become empty, and any
/// other shape falls back to its JSON form. Total: no value may reach the
/// renderer as an unconverted composite.
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(other) => other.to_string(),
    }
}

#[derive(Serialize)]
/// Per-source record count, reported for observability.
pub struct SourceReport {
    pub name: String,
    pub count: usize,
}

#[derive(Serialize)]
/// Merge outcome totals consumed by the printers. `sources` lists the prior
/// artifact (when given) followed by the agent files; `agents` counts only
/// the agent files, so the summary line reads like the agent count.
pub struct MergeSummary {
    pub sources: Vec<SourceReport>,
    pub agents: usize,
    pub total: usize,
    pub artifact: String,
}
