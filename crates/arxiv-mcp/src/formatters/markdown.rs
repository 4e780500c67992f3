//! Text output for tool results.

use crate::models::Paper;

/// Authors listed before falling back to "et al." in concise results.
const CONCISE_AUTHOR_LIMIT: usize = 3;

/// Format papers as a compact scan list (ID, title, lead authors, date).
///
/// Returns an empty string for an empty slice; callers supply their own
/// "no results" message.
#[must_use]
pub fn format_concise_results(papers: &[Paper]) -> String {
    papers.iter().map(format_concise_paper).collect::<Vec<_>>().join("\n")
}

/// Format a single concise entry.
#[must_use]
pub fn format_concise_paper(paper: &Paper) -> String {
    format!(
        "- ID: {}\n  Title: {}\n  Authors: {}\n  Published: {}\n",
        paper.id,
        paper.title,
        paper.author_summary(CONCISE_AUTHOR_LIMIT),
        paper.published_date
    )
}

/// Format the full metadata of one paper as Markdown.
#[must_use]
pub fn format_paper_details(paper: &Paper) -> String {
    let mut output = format!("# {}\n", paper.title);

    output.push_str(&format!("**ID**: {}\n", paper.id));
    output.push_str(&format!("**Published**: {}\n", paper.published_date));
    output.push_str(&format!("**Categories**: {}\n", paper.categories.join(", ")));
    output.push_str(&format!("**Authors**: {}\n", paper.authors.join(", ")));
    output.push_str(&format!("**PDF Link**: {}\n", paper.pdf_url.as_deref().unwrap_or("N/A")));

    output.push_str("\n## Abstract\n");
    output.push_str(&paper.summary);
    output.push('\n');

    output
}

/// Prompt asking the assistant to summarize the paper's abstract.
#[must_use]
pub fn format_summary_prompt(paper: &Paper) -> String {
    format!(
        "To the AI Assistant: The user has requested a summary of the paper \"{}\" (ID: {}). \
         Please read the following abstract and output a dense, beautifully formatted bulleted \
         summary distilling the core thesis, methodology, results, and limitations:\n\n---\n\n\
         ABSTRACT:\n{}",
        paper.title, paper.id, paper.summary
    )
}
