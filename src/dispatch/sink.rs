use futures::future::BoxFuture;

use crate::{error::Result, layout::Row};

/// Somewhere rows get written to, one range at a time
pub trait RowSink {
  fn update_range<'a>(&'a mut self, row: &'a Row) -> BoxFuture<'a, Result<()>>;
}

/// Prints rows instead of writing them, for looking at a layout before pushing it
#[derive(Debug, Default)]
pub struct PrintSink;

impl RowSink for PrintSink {
  fn update_range<'a>(&'a mut self, row: &'a Row) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
      println!("{}\t{}", row.range, row.cells.join("\t"));
      Ok(())
    })
  }
}
