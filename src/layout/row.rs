use std::fmt::{Display, Formatter, Result};

/// Every row spans columns A through E
pub const COLUMNS: usize = 5;

/// A1-notation address of a block of rows, always columns A to E.
/// Rows are 1-based, as in the sheet itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRange {
  pub sheet: String,
  pub start: usize,
  pub end: usize
}

impl RowRange {
  pub fn single(sheet: &str, row: usize) -> Self {
    RowRange { sheet: sheet.to_owned(), start: row, end: row }
  }
}

impl Display for RowRange {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}!A{}:E{}", self.sheet, self.start, self.end)
  }
}

/// One write: where it goes and the five cells that go there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
  pub range: RowRange,
  pub cells: [String; COLUMNS]
}

impl Row {
  /// Make name and id cells, blank for every model but a make's first
  pub fn make_cells(&self) -> (&str, &str) {
    (self.cells[0].as_str(), self.cells[1].as_str())
  }

  pub fn model_cells(&self) -> (&str, &str) {
    (self.cells[3].as_str(), self.cells[4].as_str())
  }
}
