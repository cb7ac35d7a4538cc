//! Shared helpers for building timetable workbooks in tests

#![allow(dead_code)]

use std::path::Path;

/// A cell to write into a test workbook
pub enum C {
    /// Empty cell
    E,
    /// Text cell
    T(&'static str),
    /// Numeric cell
    N(f64),
    /// Struck-through text cell
    S(&'static str),
}

/// Writes `rows` into the active sheet of a new XLSX workbook at `path`
pub fn write_workbook(path: &Path, rows: &[Vec<C>]) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let coordinate = (c as u32 + 1, r as u32 + 1);
            match cell {
                C::E => {}
                C::T(text) => {
                    sheet.get_cell_mut(coordinate).set_value(*text);
                }
                C::N(n) => {
                    sheet.get_cell_mut(coordinate).set_value_number(*n);
                }
                C::S(text) => {
                    let cell = sheet.get_cell_mut(coordinate);
                    cell.set_value(*text);
                    cell.get_style_mut().get_font_mut().set_strikethrough(true);
                }
            }
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).expect("Failed to write workbook");
}

/// Two classes, two days of three periods each
///
/// 10а: Monday матем/12, кл.час(struck)/5.0, труд/" 204 "; Tuesday рус.яз, window, биолог
/// 11б: Monday литер/спортзал, empty, empty; Tuesday англ.яз, физкул, empty
pub fn sample_rows() -> Vec<Vec<C>> {
    use C::*;
    vec![
        vec![T("Расписание на неделю")],
        vec![E, E, T("10А"), E, T("11Б"), E],
        vec![T("Пн"), N(1.0), T("Матем"), N(12.0), T("литер."), T("Спортзал")],
        vec![E, N(2.0), S("Кл.час"), N(5.0), E, E],
        vec![E, N(3.0), T("труд"), T(" 204 "), E, E],
        vec![T("Вт"), N(1.0), T("рус.яз"), N(7.0), T("англ.яз"), N(31.0)],
        vec![E, N(2.0), E, E, T("физкул"), E],
        vec![E, N(3.0), T("биолог"), N(8.0), E, E],
    ]
}
