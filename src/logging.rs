use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// http internals are chatty at debug
const QUIET_TARGETS: [&str; 2] = ["hyper=info", "reqwest=info"];

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init() {
  let mut filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  for directive in QUIET_TARGETS {
    if let Ok(d) = directive.parse() {
      filter = filter.add_directive(d);
    }
  }

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .try_init();
}
