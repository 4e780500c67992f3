#![no_main]

use arxiv_mcp::models::{CategoryInput, CitationInput, DownloadInput, PaperIdInput};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First try to parse as valid JSON
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        // Then try each tool input type
        if let Ok(input) = serde_json::from_value::<CitationInput>(json.clone()) {
            let _ = input.validate();
        }
        if let Ok(input) = serde_json::from_value::<DownloadInput>(json.clone()) {
            if input.validate().is_ok() {
                assert!(!input.file_name().contains('/'));
            }
        }
        let _ = serde_json::from_value::<PaperIdInput>(json.clone());
        let _ = serde_json::from_value::<CategoryInput>(json);
    }
});
