mod pacing;
mod sink;
mod dispatcher;

pub use pacing::*;
pub use sink::*;
pub use dispatcher::*;
