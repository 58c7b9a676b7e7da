//! Report renderer: one role's finalized defect collection as a styled
//! xlsx worksheet.
//!
//! The 12-column layout is a positional contract (see `models::schema`);
//! every visual constant lives there, and row content is composed by a
//! pure helper so it is testable apart from workbook styling. The workbook
//! is saved once at the end; a failed save surfaces as the error, never a
//! partial file.

use crate::models::schema::{
    severity_style, COLUMN_WIDTHS, HEADERS, HEADER_FILL, WRAP_COLUMNS,
};
use crate::models::{display_text, Record, Role};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;

/// Compose the 12 display cells for one record, in column order.
///
/// `Role` is the role's display name on every row. Missing severity
/// defaults to `MEDIUM`; an explicit null stays empty. `Status` is always
/// the literal `OPEN` — the renderer does not trust upstream status.
pub fn compose_row(role: &Role, defect: &Record) -> [String; 12] {
    [
        display_text(defect.get("bug_id")),
        role.name.clone(),
        match defect.get("severity") {
            None => "MEDIUM".to_string(),
            present => display_text(present),
        },
        display_text(defect.get("category")),
        display_text(defect.get("component")),
        display_text(defect.get("file_line")),
        display_text(defect.get("description")),
        display_text(defect.get("steps")),
        display_text(defect.get("expected")),
        display_text(defect.get("actual")),
        display_text(defect.get("impact")),
        "OPEN".to_string(),
    ]
}

/// Write the role's report. Returns the number of data rows written.
///
/// Unrecognized severity text still renders, with the plain bordered
/// style; recognized levels get the fixed palette fill and font.
pub fn write_report(role: &Role, defects: &[Record], out_path: &Path) -> Result<usize, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(role.sheet_title())?;

    let header_format = Format::new()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_font_color(Color::White)
        .set_bold()
        .set_font_size(11)
        .set_align(FormatAlign::Center)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let cell = Format::new().set_border(FormatBorder::Thin);
    let wrap_cell = Format::new().set_border(FormatBorder::Thin).set_text_wrap();
    let severity_base = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (i, defect) in defects.iter().enumerate() {
        let row = (i + 1) as u32;
        let cells = compose_row(role, defect);
        let severity_format = match severity_style(&cells[2]) {
            Some(style) => {
                let styled = severity_base
                    .clone()
                    .set_background_color(Color::RGB(style.fill))
                    .set_font_color(Color::RGB(style.font));
                if style.bold {
                    styled.set_bold()
                } else {
                    styled
                }
            }
            None => severity_base.clone(),
        };
        for (col, value) in cells.iter().enumerate() {
            let col = col as u16;
            let format = if col == 2 {
                &severity_format
            } else if WRAP_COLUMNS.contains(&col) {
                &wrap_cell
            } else {
                &cell
            };
            worksheet.write_string_with_format(row, col, value.as_str(), format)?;
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofilter(0, 0, defects.len() as u32, (HEADERS.len() - 1) as u16)?;

    workbook.save(out_path)?;
    Ok(defects.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn security_role() -> Role {
        Role {
            number: 3,
            name: "Security".into(),
        }
    }

    #[test]
    fn test_row_composition_contract() {
        let defect: Record = serde_json::from_str(
            r#"{"bug_id":"R03-002","severity":"HIGH","category":"auth","component":"session","file_line":"src/session.rs:42","description":"token leak","steps":["login","inspect cookie"],"expected":"redacted","actual":"plaintext","impact":"account takeover","status":"CLOSED"}"#,
        )
        .unwrap();
        let row = compose_row(&security_role(), &defect);
        assert_eq!(row[0], "R03-002");
        assert_eq!(row[1], "Security");
        assert_eq!(row[2], "HIGH");
        assert_eq!(row[3], "auth");
        assert_eq!(row[4], "session");
        assert_eq!(row[5], "src/session.rs:42");
        assert_eq!(row[6], "token leak");
        assert_eq!(row[7], "login\ninspect cookie");
        assert_eq!(row[8], "redacted");
        assert_eq!(row[9], "plaintext");
        assert_eq!(row[10], "account takeover");
        // Upstream status is never trusted; the report always says OPEN.
        assert_eq!(row[11], "OPEN");
    }

    #[test]
    fn test_role_and_status_repeat_on_every_row() {
        let defects: Vec<Record> = serde_json::from_str(
            r#"[{"description":"x"},{"description":"y"},{"status":"RESOLVED"}]"#,
        )
        .unwrap();
        for defect in &defects {
            let row = compose_row(&security_role(), defect);
            assert_eq!(row[1], "Security");
            assert_eq!(row[11], "OPEN");
        }
    }

    #[test]
    fn test_missing_severity_defaults_to_medium() {
        let defect: Record = serde_json::from_str(r#"{"description":"no level"}"#).unwrap();
        let row = compose_row(&security_role(), &defect);
        assert_eq!(row[2], "MEDIUM");
        assert!(severity_style(&row[2]).is_some());
        // Absent free-text fields become empty strings.
        assert_eq!(row[3], "");
        // An explicit null stays empty and unstyled.
        let defect: Record = serde_json::from_str(r#"{"severity":null}"#).unwrap();
        let row = compose_row(&security_role(), &defect);
        assert_eq!(row[2], "");
        assert!(severity_style(&row[2]).is_none());
    }

    #[test]
    fn test_end_to_end_report() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("role_03.xlsx");
        let defects: Vec<Record> = serde_json::from_str(
            r#"[
                {"bug_id":"R03-001","severity":"CRITICAL","category":"auth","description":"token leak"},
                {"bug_id":"R03-002","severity":"HIGH","steps":["login","inspect cookie"]},
                {"bug_id":"R03-003","severity":"MEDIUM","file_line":"src/session.rs:42"},
                {"bug_id":"R03-004","severity":"LOW","impact":"cosmetic"}
            ]"#,
        )
        .unwrap();

        let rows = write_report(&security_role(), &defects, &out).unwrap();
        assert_eq!(rows, 4);
        assert!(out.exists());
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_collection_renders_header_only() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("empty.xlsx");
        let rows = write_report(&security_role(), &[], &out).unwrap();
        assert_eq!(rows, 0);
        assert!(out.exists());
    }

    #[test]
    fn test_unrecognized_severity_still_renders() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("odd.xlsx");
        let defects: Vec<Record> = serde_json::from_str(
            r#"[
                {"severity":"BLOCKER","description":"unknown level"},
                {"severity":null,"description":"null level"},
                {"description":"missing level defaults to MEDIUM"}
            ]"#,
        )
        .unwrap();
        let rows = write_report(&security_role(), &defects, &out).unwrap();
        assert_eq!(rows, 3);
    }

    #[test]
    fn test_composite_fields_are_coerced() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("steps.xlsx");
        let defects: Vec<Record> = serde_json::from_str(
            r#"[{"steps":["one","two",3],"expected":{"nested":true},"actual":7}]"#,
        )
        .unwrap();
        // Any field shape renders; coercion is total.
        assert_eq!(write_report(&security_role(), &defects, &out).unwrap(), 1);
    }

    #[test]
    fn test_save_failure_surfaces() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("missing_dir").join("report.xlsx");
        let defects: Vec<Record> = Vec::new();
        assert!(write_report(&security_role(), &defects, &out).is_err());
    }
}
