use std::time::Duration;

/// Decides whether to wait after a write, keyed on the write's 0-based
/// position in the run.
pub trait Pacing {
  fn pause_after(&self, position: usize) -> Option<Duration>;
}

/// Waits `pause` after every `every`-th write, starting with the very first.
/// Blind to how the remote end is actually throttling us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWindow {
  pub every: usize,
  pub pause: Duration
}

impl Default for FixedWindow {
  fn default() -> Self {
    FixedWindow { every: 10, pause: Duration::from_secs(2) }
  }
}

impl Pacing for FixedWindow {
  fn pause_after(&self, position: usize) -> Option<Duration> {
    if self.every == 0 || position % self.every != 0 { return None }
    Some(self.pause)
  }
}

/// Never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl Pacing for Unpaced {
  fn pause_after(&self, _: usize) -> Option<Duration> { None }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_window_pauses_on_multiples_of_ten() {
    let pacing = FixedWindow::default();
    let paused: Vec<usize> = (0..35).filter(|&i| pacing.pause_after(i).is_some()).collect();

    assert_eq!(paused, [0, 10, 20, 30]);
    assert_eq!(pacing.pause_after(0), Some(Duration::from_secs(2)));
  }

  #[test]
  fn zero_width_window_never_pauses() {
    let pacing = FixedWindow { every: 0, pause: Duration::from_secs(1) };
    assert!((0..20).all(|i| pacing.pause_after(i).is_none()));
  }

  #[test]
  fn unpaced_never_pauses() {
    assert!((0..20).all(|i| Unpaced.pause_after(i).is_none()));
  }
}
