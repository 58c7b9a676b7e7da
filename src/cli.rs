//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "faultline",
    version,
    about = "Merge QA agent defect findings and render role reports",
    long_about = "Faultline — a tiny, fast CLI to merge defect findings from independent QA agent runs into one densely numbered list per role and render it as a styled xlsx report.\n\nPipeline: extract -> merge -> report, one role at a time; roles are independent.",
    after_help = "Examples:\n  faultline merge --role 3 --reports-dir qa_reports\n  faultline report --defects qa_reports/role_03_defects.json --role 3 --role-name Security --out role_03.xlsx\n  faultline run --role 3 --role-name Security --out role_03.xlsx",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for merging and reporting.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current faultline version."
    )]
    Version,
    /// Merge agent results for a role
    #[command(
        about = "Merge agent results",
        long_about = "Combine an optional prior defect artifact with every role_NN_agent_*.json source under the reports dir (lexical order), renumber bug ids densely, and persist the merged collection.",
        after_help = "Examples:\n  faultline merge --role 1\n  faultline merge --role 3 --existing qa_reports/role_03_defects.json --output json"
    )]
    Merge {
        #[arg(long, help = "Role number (>= 1)")]
        role: u32,
        #[arg(long, help = "Directory holding agent result files (default: qa_reports)")]
        reports_dir: Option<String>,
        #[arg(long, help = "Prior defect artifact to merge first ('none' to skip)")]
        existing: Option<String>,
        #[arg(long, help = "Merged artifact path (default: <reports-dir>/role_NN_defects.json)")]
        out: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Render a defect artifact as an xlsx report
    #[command(
        about = "Render xlsx report",
        long_about = "Render a persisted defect collection as a formatted xlsx report: fixed 12-column schema, severity styling, frozen header row, autofilter.",
        after_help = "Examples:\n  faultline report --defects qa_reports/role_03_defects.json --role 3 --role-name Security --out role_03.xlsx"
    )]
    Report {
        #[arg(long, help = "Path to the merged defect artifact")]
        defects: String,
        #[arg(long, help = "Role number (>= 1)")]
        role: u32,
        #[arg(long, help = "Role display name, repeated on every row")]
        role_name: String,
        #[arg(long, help = "Report output path (.xlsx)")]
        out: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Merge then render in one pass
    #[command(
        about = "Merge and render",
        long_about = "Run the full pipeline for one role: merge agent results, persist the defect artifact, and render the xlsx report from the merged collection.",
        after_help = "Examples:\n  faultline run --role 3 --role-name Security --out role_03.xlsx\n  faultline run --role 1 --role-name \"API Contract\" --existing none --out role_01.xlsx"
    )]
    Run {
        #[arg(long, help = "Role number (>= 1)")]
        role: u32,
        #[arg(long, help = "Role display name, repeated on every row")]
        role_name: String,
        #[arg(long, help = "Directory holding agent result files (default: qa_reports)")]
        reports_dir: Option<String>,
        #[arg(long, help = "Prior defect artifact to merge first ('none' to skip)")]
        existing: Option<String>,
        #[arg(long, help = "Merged artifact path (default: <reports-dir>/role_NN_defects.json)")]
        defects_out: Option<String>,
        #[arg(long, help = "Report output path (.xlsx)")]
        out: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
