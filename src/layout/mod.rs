mod row;
mod engine;

pub use row::*;
pub use engine::*;
