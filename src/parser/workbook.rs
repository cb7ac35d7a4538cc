//! XLSX workbook loading
//!
//! Reads the active worksheet of a workbook into a [`Grid`], keeping cell
//! values and the strikethrough flag of each cell's font.

use std::path::Path;

use umya_spreadsheet::{reader, Cell, CellRawValue, Spreadsheet, Worksheet};

use super::grid::{CellValue, Grid, GridCell};
use super::sheet::ParseError;

/// Loads the active sheet of the workbook at `path`
pub fn load_active_sheet(path: &Path) -> Result<Grid, ParseError> {
    let book = reader::xlsx::read(path).map_err(|e| ParseError::Workbook(e.to_string()))?;
    let sheet = active_sheet(&book).ok_or(ParseError::NoActiveSheet)?;
    Ok(sheet_to_grid(sheet))
}

/// Worksheet selected as the active tab
fn active_sheet(book: &Spreadsheet) -> Option<&Worksheet> {
    let index = book.get_workbook_view().get_active_tab().to_owned() as usize;
    book.get_sheet(&index)
}

/// Copies the used area of a worksheet into a grid
fn sheet_to_grid(sheet: &Worksheet) -> Grid {
    let max_column = sheet.get_highest_column();
    let max_row = sheet.get_highest_row();

    let mut grid = Grid::new();
    for row in 1..=max_row {
        let cells = (1..=max_column)
            .map(|column| {
                sheet
                    .get_cell((column, row))
                    .map(to_grid_cell)
                    .unwrap_or_default()
            })
            .collect();
        grid.push_row(cells);
    }
    grid
}

fn to_grid_cell(cell: &Cell) -> GridCell {
    let value = match cell.get_raw_value() {
        CellRawValue::Empty => CellValue::Empty,
        CellRawValue::Numeric(n) => CellValue::Number(*n),
        CellRawValue::Bool(b) => CellValue::Bool(*b),
        CellRawValue::Error(_) => CellValue::Error(cell.get_value().to_string()),
        _ => CellValue::Text(cell.get_value().to_string()),
    };
    let strike = cell
        .get_style()
        .get_font()
        .is_some_and(|font| font.get_strikethrough().to_owned());

    GridCell { value, strike }
}
