//! Faultline CLI binary entry point.
//! Delegates to modules for merge/report and prints results.

mod cli;
mod discover;
mod extract;
mod merge;
mod models;
mod output;
mod report;
mod utils;

use crate::models::{Record, Role};
use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Merge {
            role,
            reports_dir,
            existing,
            out,
            output,
        } => {
            let role_number = checked_role(role);
            let output = output.unwrap_or_else(|| "human".to_string());
            let dir = PathBuf::from(reports_dir.as_deref().unwrap_or("qa_reports"));
            let sources = discover::agent_sources(&dir, role_number);
            if sources.is_empty() && output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("no agent sources found under {}", dir.to_string_lossy())
                );
            }
            let prior = prior_path(existing.as_deref());
            let out_path = out
                .map(PathBuf::from)
                .unwrap_or_else(|| dir.join(format!("role_{:02}_defects.json", role_number)));
            match merge::run_merge(role_number, prior.as_deref(), &sources, &out_path) {
                Ok((outcome, warnings)) => output::print_merge(&outcome.summary, &output, &warnings),
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("could not write {}: {}", out_path.to_string_lossy(), e)
                    );
                    std::process::exit(2);
                }
            }
        }
        Commands::Report {
            defects,
            role,
            role_name,
            out,
            output,
        } => {
            let role = Role {
                number: checked_role(role),
                name: role_name,
            };
            let output = output.unwrap_or_else(|| "human".to_string());
            let records = match load_artifact(Path::new(&defects)) {
                Ok(r) => r,
                Err(msg) => {
                    eprintln!("{} {}", utils::error_prefix(), msg);
                    std::process::exit(2);
                }
            };
            render(&role, &records, Path::new(&out), &output);
        }
        Commands::Run {
            role,
            role_name,
            reports_dir,
            existing,
            defects_out,
            out,
            output,
        } => {
            let role = Role {
                number: checked_role(role),
                name: role_name,
            };
            let output = output.unwrap_or_else(|| "human".to_string());
            let dir = PathBuf::from(reports_dir.as_deref().unwrap_or("qa_reports"));
            let sources = discover::agent_sources(&dir, role.number);
            if sources.is_empty() && output != "json" {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!("no agent sources found under {}", dir.to_string_lossy())
                );
            }
            let prior = prior_path(existing.as_deref());
            let artifact = defects_out
                .map(PathBuf::from)
                .unwrap_or_else(|| dir.join(format!("role_{:02}_defects.json", role.number)));
            match merge::run_merge(role.number, prior.as_deref(), &sources, &artifact) {
                Ok((outcome, warnings)) => {
                    output::print_merge(&outcome.summary, &output, &warnings);
                    render(&role, &outcome.defects, Path::new(&out), &output);
                }
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("could not write {}: {}", artifact.to_string_lossy(), e)
                    );
                    std::process::exit(2);
                }
            }
        }
    }
}

/// Role numbers are role-scoped id prefixes; zero is reserved.
fn checked_role(role: u32) -> u32 {
    if role < 1 {
        eprintln!("{} {}", utils::error_prefix(), "role number must be >= 1");
        std::process::exit(2);
    }
    role
}

/// Treat the literal "none" as no prior artifact, matching the sentinel
/// existing orchestration scripts pass.
fn prior_path(existing: Option<&str>) -> Option<PathBuf> {
    existing.filter(|s| *s != "none").map(PathBuf::from)
}

/// Load a persisted defect artifact through the same tolerant extraction
/// chain as agent output. Failing to load it at all is fatal for a report
/// run, unlike a degraded agent source during merge.
fn load_artifact(path: &Path) -> Result<Vec<Record>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {}", path.to_string_lossy(), e))?;
    extract::extract_records(&text).ok_or_else(|| {
        format!(
            "could not parse defect artifact {} ({} bytes)",
            path.to_string_lossy(),
            text.len()
        )
    })
}

fn render(role: &Role, defects: &[Record], out: &Path, output: &str) {
    match report::write_report(role, defects, out) {
        Ok(rows) => output::print_report(rows, &out.to_string_lossy(), output),
        Err(e) => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("could not write {}: {}", out.to_string_lossy(), e)
            );
            std::process::exit(2);
        }
    }
}
