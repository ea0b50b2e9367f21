use std::time::Duration;
use tracing::{debug, info};

use crate::{error::Result, layout::Row};
use super::{Pacing, RowSink};

/// What a completed dispatch did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
  pub rows_written: usize,
  pub pauses: usize,
  pub paused_for: Duration
}

/// Writes rows one after another, pacing as told. The first failed write
/// ends the run; rows already written stay written.
pub struct Dispatcher<S, P> {
  sink: S,
  pacing: P
}

impl<S: RowSink, P: Pacing> Dispatcher<S, P> {
  pub fn new(sink: S, pacing: P) -> Self {
    Dispatcher { sink, pacing }
  }

  pub fn sink(&self) -> &S { &self.sink }

  pub fn into_sink(self) -> S { self.sink }

  pub async fn dispatch(&mut self, rows: &[Row]) -> Result<DispatchReport> {
    let mut report = DispatchReport::default();

    for (position, row) in rows.iter().enumerate() {
      self.sink.update_range(row).await?;
      report.rows_written += 1;
      debug!(position, range = %row.range, "row written");

      if let Some(pause) = self.pacing.pause_after(position) {
        debug!(position, ?pause, "pacing");
        tokio::time::sleep(pause).await;
        report.pauses += 1;
        report.paused_for += pause;
      }
    }

    info!(
      rows = report.rows_written,
      pauses = report.pauses,
      paused_for = ?report.paused_for,
      "dispatch finished"
    );
    Ok(report)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::future::BoxFuture;
  use crate::{
    dispatch::{FixedWindow, Unpaced},
    error::SyncError,
    layout::RowRange
  };

  #[derive(Default)]
  struct Recorder {
    ranges: Vec<String>,
    fail_at: Option<usize>
  }

  impl RowSink for Recorder {
    fn update_range<'a>(&'a mut self, row: &'a Row) -> BoxFuture<'a, Result<()>> {
      Box::pin(async move {
        if self.fail_at == Some(self.ranges.len()) {
          return Err(SyncError::SinkWrite { range: row.range.to_string(), reason: "503".into() })
        }
        self.ranges.push(row.range.to_string());
        Ok(())
      })
    }
  }

  fn rows(count: usize) -> Vec<Row> {
    (1..=count)
      .map(|n| Row { range: RowRange::single("S", n), cells: Default::default() })
      .collect()
  }

  #[tokio::test(start_paused = true)]
  async fn writes_in_order_and_pauses_per_window() {
    let started = tokio::time::Instant::now();
    let mut dispatcher = Dispatcher::new(Recorder::default(), FixedWindow::default());

    let report = dispatcher.dispatch(&rows(21)).await.unwrap();

    assert_eq!(report.rows_written, 21);
    assert_eq!(report.pauses, 3);
    assert_eq!(report.paused_for, Duration::from_secs(6));
    assert!(started.elapsed() >= Duration::from_secs(6));
    assert_eq!(dispatcher.sink().ranges.first().map(String::as_str), Some("S!A1:E1"));
    assert_eq!(dispatcher.sink().ranges.last().map(String::as_str), Some("S!A21:E21"));
  }

  #[tokio::test(start_paused = true)]
  async fn first_failure_stops_the_run() {
    let sink = Recorder { fail_at: Some(4), ..Default::default() };
    let mut dispatcher = Dispatcher::new(sink, Unpaced);

    let err = dispatcher.dispatch(&rows(10)).await.unwrap_err();

    match err {
      SyncError::SinkWrite { range, .. } => assert_eq!(range, "S!A5:E5"),
      other => panic!("unexpected error {:?}", other)
    }
    assert_eq!(dispatcher.into_sink().ranges.len(), 4);
  }

  #[tokio::test]
  async fn nothing_to_write() {
    let mut dispatcher = Dispatcher::new(Recorder::default(), FixedWindow::default());
    assert_eq!(dispatcher.dispatch(&[]).await.unwrap(), DispatchReport::default());
  }
}
