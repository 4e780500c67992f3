//! Output formatters for tool results.

mod citation;
mod markdown;

pub use citation::*;
pub use markdown::*;
