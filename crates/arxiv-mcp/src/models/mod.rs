//! Data models for arXiv entities and tool inputs.

mod enums;
mod inputs;
mod paper;

pub use enums::{CitationFormat, SortBy};
pub use inputs::{CategoryInput, CitationInput, DownloadInput, PaperIdInput, SearchInput};
pub use paper::Paper;
