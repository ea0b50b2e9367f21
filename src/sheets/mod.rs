mod value_range;
mod client;

pub use value_range::*;
pub use client::*;
