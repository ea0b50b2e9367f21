mod make;
mod document;
mod assemble;

pub use make::*;
pub use document::*;
pub use assemble::*;
