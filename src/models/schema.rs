//! Fixed report schema: column contract, widths, and severity palette.
//!
//! Downstream tooling indexes report columns positionally, so the header
//! order, widths, and palette here are a compatibility contract. They are
//! process-wide constants with no initialization lifecycle.

/// Column headers, in contract order.
pub const HEADERS: [&str; 12] = [
    "Bug ID",
    "Role",
    "Severity",
    "Category",
    "Component",
    "File:Line",
    "Description",
    "Steps to Reproduce",
    "Expected Behavior",
    "Actual Behavior",
    "Impact",
    "Status",
];

/// Column widths in character units, one per header.
pub const COLUMN_WIDTHS: [f64; 12] = [
    10.0, 25.0, 12.0, 22.0, 20.0, 50.0, 50.0, 50.0, 40.0, 40.0, 35.0, 10.0,
];

/// Zero-based indices of the long free-text columns that get wrap-text.
pub const WRAP_COLUMNS: [u16; 5] = [6, 7, 8, 9, 10];

/// Header row fill color.
pub const HEADER_FILL: u32 = 0x1F4E79;

/// Visual encoding for one recognized severity level.
pub struct SeverityStyle {
    pub fill: u32,
    pub font: u32,
    pub bold: bool,
}

/// Palette lookup for a severity cell. Unrecognized values (including the
/// empty string) get `None` and render with the plain bordered style.
pub fn severity_style(severity: &str) -> Option<SeverityStyle> {
    match severity {
        "CRITICAL" => Some(SeverityStyle {
            fill: 0xFF0000,
            font: 0xFFFFFF,
            bold: true,
        }),
        "HIGH" => Some(SeverityStyle {
            fill: 0xFF6600,
            font: 0xFFFFFF,
            bold: true,
        }),
        "MEDIUM" => Some(SeverityStyle {
            fill: 0xFFD700,
            font: 0x000000,
            bold: true,
        }),
        "LOW" => Some(SeverityStyle {
            fill: 0x90EE90,
            font: 0x000000,
            bold: false,
        }),
        _ => None,
    }
}
