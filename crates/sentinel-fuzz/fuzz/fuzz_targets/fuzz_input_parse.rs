#![no_main]

use arxiv_mcp::models::SearchInput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Validated searches always land inside the page-size bounds
    if let Ok(mut input) = serde_json::from_slice::<SearchInput>(data) {
        if input.validate().is_ok() {
            assert!((1..=50).contains(&input.max_results));
        }
    }
});
