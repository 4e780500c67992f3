#![no_main]

use arxiv_mcp::feed::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must yield papers or a ParseError, never a panic
    if let Ok(xml) = std::str::from_utf8(data) {
        if let Ok(papers) = normalize(xml) {
            for paper in papers {
                assert!(!paper.title.contains("  "));
                assert_eq!(paper.title.trim(), paper.title);
            }
        }
    }
});
