//! In-memory spreadsheet grid and day-block tracking
//!
//! The sheet parser works on a `Grid` rather than on a workbook, so the
//! layout rules run without any file I/O.

use std::fmt;

/// Value of a single spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value
    Empty,
    /// Any numeric value, integers included
    Number(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Formula error such as `#N/A`
    Error(String),
}

impl CellValue {
    /// Numeric value of the cell, if it holds a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text rendering of the cell, `None` when the cell is empty
    ///
    /// Whole numbers render without a fractional part.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                Some(format!("{}", *n as i64))
            }
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(text) | CellValue::Error(text) => Some(text.clone()),
            CellValue::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// A cell value with the formatting the parser cares about
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// The cell value
    pub value: CellValue,
    /// Whether the text is rendered with strikethrough
    pub strike: bool,
}

impl GridCell {
    /// A plain cell
    pub fn new(value: impl Into<CellValue>) -> Self {
        Self {
            value: value.into(),
            strike: false,
        }
    }

    /// A cell whose text is struck through
    pub fn struck(value: impl Into<CellValue>) -> Self {
        Self {
            value: value.into(),
            strike: true,
        }
    }

    /// An empty cell
    pub const fn empty() -> Self {
        Self {
            value: CellValue::Empty,
            strike: false,
        }
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self::empty()
    }
}

static EMPTY_CELL: GridCell = GridCell::empty();

/// Zero-based location of a cell, displayed in A1 notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub column: usize,
}

impl CellRef {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut n = self.column + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(char::from(b'A' + rem as u8));
            n = (n - 1) / 26;
        }
        let column: String = letters.iter().rev().collect();
        write!(f, "{}{}", column, self.row + 1)
    }
}

/// Rows of cells in sheet order; cells outside the stored area read as empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<GridCell>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from rows of cells
    pub fn from_rows(rows: Vec<Vec<GridCell>>) -> Self {
        Self { rows }
    }

    /// Appends a row
    pub fn push_row(&mut self, row: Vec<GridCell>) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at a zero-based position
    pub fn cell(&self, row: usize, column: usize) -> &GridCell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Cells of a row, empty for rows outside the grid
    pub fn row(&self, row: usize) -> &[GridCell] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Running state of the period counter fold
///
/// The period counter restarts at the beginning of each day block. The
/// first counter opens day 0 and every decrease opens the next day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTracker {
    previous: Option<i64>,
    day: Option<usize>,
}

impl DayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next counter and returns the day index its row belongs to
    pub fn advance(&mut self, counter: i64) -> usize {
        let day = match (self.day, self.previous) {
            (Some(day), Some(previous)) if counter < previous => day + 1,
            (Some(day), _) => day,
            (None, _) => 0,
        };
        self.day = Some(day);
        self.previous = Some(counter);
        day
    }

    /// Current day index, `None` before the first data row
    pub fn day(&self) -> Option<usize> {
        self.day
    }
}
