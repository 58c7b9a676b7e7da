//! Merge engine: combines a prior defect collection with freshly extracted
//! agent collections for one role, renumbers the result, and persists it.
//!
//! Individual sources degrade to zero records with a warning; the only
//! fatal condition is failing to write the merged artifact. The prior
//! collection always precedes fresh records, and within each source input
//! order is preserved, so final bug ids are stable across replays.

use crate::extract::extract_records;
use crate::models::{bug_id, MergeSummary, Record, SourceReport};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of one role's merge: the finalized collection plus its summary.
pub struct MergeOutcome {
    pub defects: Vec<Record>,
    pub summary: MergeSummary,
}

/// Merge the prior collection (if any) with each agent source in caller
/// order, renumber densely, and write the role's canonical defect artifact.
///
/// Returns the outcome plus non-fatal warnings. A missing or undecodable
/// source contributes zero records; only the artifact write can fail. The
/// prior path goes through the same extraction chain as agent text, so a
/// prior wrapped in a fence or prose still loads.
pub fn run_merge(
    role_number: u32,
    prior: Option<&Path>,
    sources: &[PathBuf],
    out_path: &Path,
) -> io::Result<(MergeOutcome, Vec<String>)> {
    let mut warnings: Vec<String> = Vec::new();
    let mut defects: Vec<Record> = Vec::new();
    let mut reports: Vec<SourceReport> = Vec::new();

    if let Some(path) = prior {
        let count = load_source(path, &mut defects, &mut warnings);
        reports.push(SourceReport {
            name: path.to_string_lossy().to_string(),
            count,
        });
    }
    for path in sources {
        let count = load_source(path, &mut defects, &mut warnings);
        reports.push(SourceReport {
            name: path.to_string_lossy().to_string(),
            count,
        });
    }

    let defects = renumber(role_number, defects);

    // Persist before any rendering so a replayed render reproduces the
    // same report from the artifact alone.
    let json = serde_json::to_string_pretty(&defects)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(out_path, json)?;

    let summary = MergeSummary {
        total: defects.len(),
        agents: sources.len(),
        sources: reports,
        artifact: out_path.to_string_lossy().to_string(),
    };
    Ok((MergeOutcome { defects, summary }, warnings))
}

/// Read and extract one source, appending its records in input order.
/// Unreadable or undecodable sources contribute zero records and a warning
/// naming them.
fn load_source(path: &Path, defects: &mut Vec<Record>, warnings: &mut Vec<String>) -> usize {
    let text = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warnings.push(format!("could not read {}: {}", path.to_string_lossy(), e));
            return 0;
        }
    };
    match extract_records(&text) {
        Some(records) => {
            let count = records.len();
            defects.extend(records);
            count
        }
        None => {
            // Measure the trimmed text, the same string the chain failed on.
            warnings.push(format!(
                "could not parse {} ({} bytes)",
                path.to_string_lossy(),
                text.trim().len()
            ));
            0
        }
    }
}

/// Final normalization pass: each record gets a dense, role-scoped
/// `bug_id`. Any id present in the input is discarded. Consumes the
/// collection so caller-supplied data is never aliased.
fn renumber(role_number: u32, defects: Vec<Record>) -> Vec<Record> {
    defects
        .into_iter()
        .enumerate()
        .map(|(i, mut record)| {
            record.insert("bug_id".into(), Value::String(bug_id(role_number, i + 1)));
            record
        })
        .collect()
}
