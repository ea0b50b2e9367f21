mod client_secret;
mod token;
mod flow;
mod client;

pub use client_secret::*;
pub use token::*;
pub use flow::*;
pub use client::*;
