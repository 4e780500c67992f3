//! Shared helpers for building Atom feeds and mock-backed tool contexts.
#![allow(dead_code)]

use std::sync::Arc;

use wiremock::MockServer;

use arxiv_mcp::client::ArxivClient;
use arxiv_mcp::config::Config;
use arxiv_mcp::tools::ToolContext;

/// Reference feed: one entry, two authors, one category, a pdf link.
pub const SINGLE_ENTRY_FEED: &str = include_str!("../fixtures/single_entry.xml");

/// Feed with metadata but no entries.
pub const EMPTY_FEED: &str = include_str!("../fixtures/empty_feed.xml");

/// Minimal description of one `<entry>`.
pub struct EntrySpec<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub authors: &'a [&'a str],
    pub categories: &'a [&'a str],
    pub with_pdf: bool,
}

impl<'a> EntrySpec<'a> {
    pub fn new(id: &'a str, title: &'a str) -> Self {
        Self { id, title, authors: &["Test Author"], categories: &["cs.AI"], with_pdf: true }
    }

    pub fn authors(mut self, authors: &'a [&'a str]) -> Self {
        self.authors = authors;
        self
    }

    pub fn categories(mut self, categories: &'a [&'a str]) -> Self {
        self.categories = categories;
        self
    }

    pub fn without_pdf(mut self) -> Self {
        self.with_pdf = false;
        self
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("  <entry>\n");
        xml.push_str(&format!("    <id>http://arxiv.org/abs/{}</id>\n", self.id));
        xml.push_str("    <published>2024-01-15T12:00:00Z</published>\n");
        xml.push_str(&format!("    <title>{}</title>\n", self.title));
        xml.push_str(&format!("    <summary>Abstract of {}.</summary>\n", self.title));
        for author in self.authors {
            xml.push_str(&format!("    <author><name>{author}</name></author>\n"));
        }
        xml.push_str(&format!(
            "    <link href=\"http://arxiv.org/abs/{}\" rel=\"alternate\" type=\"text/html\"/>\n",
            self.id
        ));
        if self.with_pdf {
            xml.push_str(&format!(
                "    <link title=\"pdf\" href=\"http://arxiv.org/pdf/{}\" rel=\"related\" type=\"application/pdf\"/>\n",
                self.id
            ));
        }
        for category in self.categories {
            xml.push_str(&format!(
                "    <category term=\"{category}\" scheme=\"http://arxiv.org/schemas/atom\"/>\n"
            ));
        }
        xml.push_str("  </entry>\n");
        xml
    }
}

/// Wrap entries in a feed element.
pub fn feed(entries: &[EntrySpec<'_>]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<feed xmlns=\"http://www.w3.org/2005/Atom\">\n  <title type=\"html\">ArXiv Query</title>\n",
    );
    for entry in entries {
        xml.push_str(&entry.to_xml());
    }
    xml.push_str("</feed>\n");
    xml
}

/// Tool context whose client talks to `mock_server` with no rate-limit delay.
pub fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    let config = Config::for_testing(&mock_server.uri());
    let client = ArxivClient::new(config).unwrap();
    ToolContext::new(Arc::new(client))
}
