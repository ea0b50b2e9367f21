use tracing::debug;

use crate::vehicles::Make;
use super::{Row, RowRange, COLUMNS};

pub const HEADER_ROW: usize = 1;

/// Data starts right below the header
pub const FIRST_DATA_ROW: usize = 2;

pub const HEADER_CELLS: [&str; COLUMNS] = ["make name", "id", "", "model name", "id"];

pub fn header(sheet: &str) -> Row {
  Row {
    range: RowRange::single(sheet, HEADER_ROW),
    cells: HEADER_CELLS.map(String::from)
  }
}

/// Flattens makes into sheet rows: the header first, then one row per
/// (make, model) pair in make order and model order within a make.
///
/// A make's name and id are only written on the row of its first model so
/// the sheet reads as groups. Makes without models produce nothing.
pub fn lay_out(sheet: &str, makes: &[Make]) -> Vec<Row> {
  let model_count: usize = makes.iter().map(|m| m.models.len()).sum();

  let mut rows = Vec::with_capacity(1 + model_count);
  rows.push(header(sheet));

  let mut next_row = FIRST_DATA_ROW;
  for make in makes {
    for (j, model) in make.models.iter().enumerate() {
      let (make_name, make_id) = if j == 0 {
        (make.name.clone(), make.id.clone())
      } else {
        (String::new(), String::new())
      };

      rows.push(Row {
        range: RowRange::single(sheet, next_row),
        cells: [make_name, make_id, String::new(), model.name.clone(), model.id.clone()]
      });
      next_row += 1;
    }
  }

  debug!(sheet, rows = rows.len(), makes = makes.len(), "laid out rows");
  rows
}

/// Row for the `model_index`-th model of the `make_index`-th make, given the
/// number of models held by every earlier make.
///
/// This is the additive addressing the sheet was first filled with. It sits
/// `make_index` rows below `lay_out`'s running counter, i.e. it leaves one
/// spare row after every earlier make (including makes with no models).
pub fn closed_form_row_index(make_index: usize, model_index: usize, models_before: usize) -> usize {
  FIRST_DATA_ROW + make_index + model_index + models_before
}
