use serde::Serialize;

use crate::layout::Row;

/// Request body of a `values.update` call
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange<'a> {
  pub range: String,
  pub major_dimension: &'static str,
  pub values: Vec<Vec<&'a str>>
}

impl<'a> From<&'a Row> for ValueRange<'a> {
  fn from(row: &'a Row) -> ValueRange<'a> {
    ValueRange {
      range: row.range.to_string(),
      major_dimension: "ROWS",
      values: vec![row.cells.iter().map(String::as_str).collect()]
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::layout::RowRange;
  use serde_json::json;

  #[test]
  fn serializes_one_row_major_row() {
    let row = Row {
      range: RowRange::single("Sheet2", 2),
      cells: ["Toyota", "m1", "", "Corolla", "c1"].map(String::from)
    };

    assert_eq!(
      serde_json::to_value(ValueRange::from(&row)).unwrap(),
      json!({
        "range": "Sheet2!A2:E2",
        "majorDimension": "ROWS",
        "values": [["Toyota", "m1", "", "Corolla", "c1"]]
      })
    );
  }
}
