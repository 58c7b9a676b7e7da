//! Console prefix helpers.
//!
//! Colors are suppressed when `NO_COLOR` is set.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal errors printed to stderr.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "✖ error:".red().bold().to_string()
    } else {
        "✖ error:".to_string()
    }
}

/// Prefix for non-fatal warnings.
pub fn warn_prefix() -> String {
    if colors_enabled() {
        "▲ warn:".yellow().bold().to_string()
    } else {
        "▲ warn:".to_string()
    }
}

/// Prefix for informational notes.
pub fn info_prefix() -> String {
    if colors_enabled() {
        "◆ info:".blue().bold().to_string()
    } else {
        "◆ info:".to_string()
    }
}
