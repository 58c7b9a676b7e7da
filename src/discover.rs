//! Discovery of per-agent source files for a role.
//!
//! Thin wrapper over glob with no decision logic of its own. Ordering is
//! lexical by file name so merges are deterministic regardless of
//! filesystem enumeration order.

use glob::glob;
use std::path::{Path, PathBuf};

/// List `role_{NN}_agent_*.json` files under `dir`, sorted by name.
pub fn agent_sources(dir: &Path, role_number: u32) -> Vec<PathBuf> {
    let pattern = dir.join(format!("role_{:02}_agent_*.json", role_number));
    let mut paths: Vec<PathBuf> = glob(&pattern.to_string_lossy())
        .map(|entries| entries.flatten().collect())
        .unwrap_or_default();
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_discovery_filters_and_sorts() {
        let tmp = tempdir().unwrap();
        for name in [
            "role_01_agent_b.json",
            "role_01_agent_a.json",
            "role_02_agent_a.json",
            "role_01_defects.json",
            "notes.txt",
        ] {
            std::fs::write(tmp.path().join(name), "[]").unwrap();
        }

        let found = agent_sources(tmp.path(), 1);
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["role_01_agent_a.json", "role_01_agent_b.json"]);
    }

    #[test]
    fn test_empty_dir_yields_nothing() {
        let tmp = tempdir().unwrap();
        assert!(agent_sources(tmp.path(), 7).is_empty());
    }
}
