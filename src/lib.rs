//! Faultline core library.
//!
//! This crate consolidates defect findings produced by several independent
//! QA analysis runs ("agents") assigned to the same review role into one
//! authoritative, sequentially numbered defect list, then renders that list
//! as a styled xlsx report.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `extract`: Tolerant extraction of records from raw agent output.
//! - `merge`: Combines prior and fresh collections, renumbers, persists.
//! - `report`: Renders a finalized collection as a formatted worksheet.
//! - `discover`: Glob-based lookup of per-agent source files.
//! - `models`: Record/Role data models and the fixed report schema.
//! - `output`: Human/JSON printers for merge and report results.
//! - `utils`: Console prefix helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod cli;
pub mod discover;
pub mod extract;
pub mod merge;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
