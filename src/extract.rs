//! Tolerant extraction of defect records from raw agent output.
//!
//! Agent output is free text that usually holds a JSON array somewhere:
//! bare, inside a ```json fence, or buried in prose and log noise. The
//! extractor is an ordered fallback chain of pure strategies; the first one
//! to yield a top-level array wins. A parse that succeeds but whose root is
//! not an array counts as a failure for that strategy and the chain
//! continues, so a "helpful" wrapper object never swallows records.

use crate::models::{display_text, Record};
use regex::Regex;
use serde_json::Value;

/// The fallback chain, in priority order.
const STRATEGIES: &[fn(&str) -> Option<Vec<Record>>] =
    &[parse_whole, parse_fenced, parse_bracket_span];

/// Extract defect records from one agent's raw output.
///
/// Returns `None` when every strategy fails; never panics. Callers log the
/// input's byte length on `None` so an operator can locate the offending
/// source without dumping its content.
pub fn extract_records(text: &str) -> Option<Vec<Record>> {
    let text = text.trim();
    STRATEGIES.iter().find_map(|strategy| strategy(text))
}

/// Strategy 1: the entire text is a JSON array.
fn parse_whole(text: &str) -> Option<Vec<Record>> {
    as_records(serde_json::from_str(text).ok()?)
}

/// Strategy 2: a fenced block (```json or bare ```) holds the array.
fn parse_fenced(text: &str) -> Option<Vec<Record>> {
    let fence = Regex::new(r"```(?:json)?\s*(\[[\s\S]*?\])\s*```").ok()?;
    let inner = fence.captures(text)?.get(1)?.as_str();
    as_records(serde_json::from_str(inner).ok()?)
}

/// Strategy 3: the span from the first `[` to the last `]`, inclusive.
/// Recovers an array surrounded by prose or log noise.
fn parse_bracket_span(text: &str) -> Option<Vec<Record>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    as_records(serde_json::from_str(&text[start..=end]).ok()?)
}

/// Accept only an array root. Elements that are not objects are coerced to
/// a record carrying their display text as `description`, so downstream
/// renumbering stays dense and total.
fn as_records(value: Value) -> Option<Vec<Record>> {
    match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => record,
                    other => {
                        let mut record = Record::new();
                        record.insert(
                            "description".into(),
                            Value::String(display_text(Some(&other))),
                        );
                        record
                    }
                })
                .collect(),
        ),
        _ => None,
    }
}
