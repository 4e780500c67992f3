//! Citation strings (BibTeX, APA, MLA).

use crate::models::{CitationFormat, Paper};

/// Stand-in for a paper with no listed authors.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Render a citation for `paper` in the requested style.
#[must_use]
pub fn format_citation(paper: &Paper, format: CitationFormat) -> String {
    match format {
        CitationFormat::Bibtex => format_bibtex(paper),
        CitationFormat::Apa => format_apa(paper),
        CitationFormat::Mla => format_mla(paper),
    }
}

/// BibTeX key: first author's surname, year, first title word (letters only).
#[must_use]
pub fn bibtex_key(paper: &Paper) -> String {
    let surname = paper
        .first_author()
        .unwrap_or(UNKNOWN_AUTHOR)
        .split_whitespace()
        .last()
        .map(letters_only)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "author".to_string());

    let year = paper.year().map(|y| y.to_string()).unwrap_or_default();

    let first_word = paper
        .title
        .split_whitespace()
        .next()
        .map(letters_only)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "paper".to_string());

    format!("{surname}{year}{first_word}")
}

fn format_bibtex(paper: &Paper) -> String {
    let authors = authors_or_unknown(paper);
    let year = paper.year().map(|y| y.to_string()).unwrap_or_default();

    let mut output = format!("@article{{{},\n", bibtex_key(paper));
    output.push_str(&format!("  title={{{}}},\n", escape_bibtex(&paper.title)));
    output.push_str(&format!("  author={{{}}},\n", escape_bibtex(&authors.join(" and "))));
    output.push_str(&format!("  journal={{arXiv preprint arXiv:{}}},\n", paper.id));
    output.push_str(&format!("  year={{{year}}}\n"));
    output.push('}');
    output
}

fn format_apa(paper: &Paper) -> String {
    format!(
        "{} ({}). {}. arXiv preprint arXiv:{}.",
        authors_or_unknown(paper).join(", "),
        year_label(paper),
        paper.title,
        paper.id
    )
}

fn format_mla(paper: &Paper) -> String {
    format!(
        "{}. \"{}.\" arXiv preprint arXiv:{} ({}).",
        authors_or_unknown(paper).join(", "),
        paper.title,
        paper.id,
        year_label(paper)
    )
}

fn authors_or_unknown(paper: &Paper) -> Vec<&str> {
    if paper.authors.is_empty() {
        vec![UNKNOWN_AUTHOR]
    } else {
        paper.authors.iter().map(String::as_str).collect()
    }
}

fn year_label(paper: &Paper) -> String {
    paper.year().map_or_else(|| "n.d.".to_string(), |y| y.to_string())
}

fn letters_only(word: &str) -> String {
    word.to_lowercase().chars().filter(char::is_ascii_lowercase).collect()
}

/// Escape a string for BibTeX output.
fn escape_bibtex(s: &str) -> String {
    s.replace('\\', "\\textbackslash{}")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('&', "\\&")
        .replace('%', "\\%")
        .replace('$', "\\$")
        .replace('#', "\\#")
        .replace('_', "\\_")
}
