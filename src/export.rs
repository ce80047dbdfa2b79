//! Excel export for the management tables.

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};

use crate::models::User;
use crate::store::EnrollmentRow;

/// Write a bold header row with column widths, and freeze it.
fn write_header(worksheet: &mut Worksheet, columns: &[(&str, f64)]) -> Result<(), XlsxError> {
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x2E7D32))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    for (col, (title, width)) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        worksheet.set_column_width(col as u16, *width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Export enrollment rows (student, class, status, date) to an Excel file.
pub fn export_enrollments_to_excel(rows: &[EnrollmentRow<'_>], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Enrollments")?;

    let columns = [
        ("NIM", 12.0),
        ("Student", 28.0),
        ("Class Code", 12.0),
        ("Class", 28.0),
        ("Status", 10.0),
        ("Enrolled", 12.0),
    ];
    write_header(worksheet, &columns)?;

    for (idx, r) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &r.student.nim_nip)?;
        worksheet.write_string(row, 1, &r.student.name)?;
        worksheet.write_string(row, 2, &r.kelas.code)?;
        worksheet.write_string(row, 3, &r.kelas.name)?;
        worksheet.write_string(row, 4, r.enrollment.status.name())?;
        worksheet.write_string(row, 5, r.enrollment.enrolled_date.format("%Y-%m-%d").to_string())?;
    }

    if !rows.is_empty() {
        worksheet.autofilter(0, 0, rows.len() as u32, (columns.len() - 1) as u16)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Export user accounts to an Excel file.
pub fn export_users_to_excel(users: &[&User], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Users")?;

    let columns = [
        ("NIM/NIP", 12.0),
        ("Name", 28.0),
        ("Email", 32.0),
        ("Role", 12.0),
        ("Department", 24.0),
        ("Phone", 16.0),
    ];
    write_header(worksheet, &columns)?;

    for (idx, user) in users.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &user.nim_nip)?;
        worksheet.write_string(row, 1, &user.name)?;
        worksheet.write_string(row, 2, &user.email)?;
        worksheet.write_string(row, 3, user.role.name())?;
        worksheet.write_string(row, 4, user.department.as_deref().unwrap_or(""))?;
        worksheet.write_string(row, 5, user.phone.as_deref().unwrap_or(""))?;
    }

    if !users.is_empty() {
        worksheet.autofilter(0, 0, users.len() as u32, (columns.len() - 1) as u16)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::store::{self, MockStore};

    #[test]
    fn test_export_filename() {
        let name = generate_export_filename("enrollments");
        assert!(name.starts_with("enrollments_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test]
    fn test_export_enrollments_writes_file() {
        let store = MockStore::seeded();
        let rows = store::enrollment::rows(&store);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enrollments.xlsx");

        export_enrollments_to_excel(&rows, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_export_users_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.xlsx");

        export_users_to_excel(&[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_students() {
        let store = MockStore::seeded();
        let students = store::user::list_by_role(&store, Role::Mahasiswa);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.xlsx");

        export_users_to_excel(&students, &path).unwrap();
        assert!(path.exists());
    }
}
