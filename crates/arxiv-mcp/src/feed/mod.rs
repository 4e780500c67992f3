//! Atom feed normalization.
//!
//! Turns the raw XML returned by the arXiv query API into [`Paper`] records.
//! The intermediate tree (see [`tree`]) reports a child that occurs once as a
//! bare value and a repeated child as an array; every zero-or-more field is
//! read through [`to_sequence`] so the records never depend on that shape.

pub mod tree;

use serde_json::Value;

use crate::error::ParseError;
use crate::models::Paper;

use self::tree::{ATTR_PREFIX, TEXT_KEY};

/// Marker preceding the identifier in an entry's `<id>` URI.
const ABS_MARKER: &str = "/abs/";

/// Link `title` attribute identifying the PDF rendition.
const PDF_LINK_TITLE: &str = "pdf";

/// Parse a feed and normalize its entries, in document order.
///
/// A feed without entries yields an empty vector.
///
/// # Errors
///
/// Returns [`ParseError`] if `xml` is not well-formed.
pub fn normalize(xml: &str) -> Result<Vec<Paper>, ParseError> {
    let tree = tree::parse(xml)?;
    Ok(normalize_tree(&tree))
}

/// Normalize an already parsed tree rooted at `feed`.
///
/// Entries with no content at all (`<entry/>`) carry no record and are skipped.
#[must_use]
pub fn normalize_tree(tree: &Value) -> Vec<Paper> {
    tree.get("feed")
        .and_then(|feed| feed.get("entry"))
        .map(to_sequence)
        .unwrap_or_default()
        .into_iter()
        .filter(|entry| !is_blank(entry))
        .map(paper_from_entry)
        .collect()
}

/// View a zero-or-more field as a sequence.
///
/// Arrays are returned element-wise, `null` as empty, anything else as a
/// one-element sequence.
#[must_use]
pub fn to_sequence(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        single => vec![single],
    }
}

/// Map one `<entry>` node to a [`Paper`].
#[must_use]
pub fn paper_from_entry(entry: &Value) -> Paper {
    let raw_id = field_text(entry, "id").unwrap_or_default();

    Paper {
        id: extract_id(raw_id).to_string(),
        title: collapse_whitespace(field_text(entry, "title").unwrap_or_default()),
        summary: collapse_whitespace(field_text(entry, "summary").unwrap_or_default()),
        published_date: field_text(entry, "published").unwrap_or_default().to_string(),
        categories: children(entry, "category")
            .filter_map(|category| attribute(category, "term"))
            .map(str::to_string)
            .collect(),
        authors: children(entry, "author")
            .filter_map(|author| field_text(author, "name"))
            .map(str::to_string)
            .collect(),
        pdf_url: children(entry, "link")
            .find(|link| attribute(link, "title") == Some(PDF_LINK_TITLE))
            .and_then(|link| attribute(link, "href"))
            .map(str::to_string),
    }
}

/// Collapse every whitespace run to one space and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Segment after the `/abs/` marker, or the whole string when there is none.
fn extract_id(raw: &str) -> &str {
    raw.split(ABS_MARKER).nth(1).filter(|id| !id.is_empty()).unwrap_or(raw)
}

fn is_blank(node: &Value) -> bool {
    matches!(node, Value::String(text) if text.is_empty())
}

fn children<'a>(node: &'a Value, name: &str) -> impl Iterator<Item = &'a Value> {
    node.get(name).map(to_sequence).unwrap_or_default().into_iter()
}

/// Text content of a child element, whether it was stored bare or beside attributes.
fn field_text<'a>(node: &'a Value, name: &str) -> Option<&'a str> {
    match node.get(name)? {
        Value::String(text) => Some(text),
        Value::Object(object) => object.get(TEXT_KEY).and_then(Value::as_str),
        _ => None,
    }
}

fn attribute<'a>(node: &'a Value, name: &str) -> Option<&'a str> {
    node.get(format!("{ATTR_PREFIX}{name}")).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_to_sequence_shapes() {
        let single = json!({"name": "A"});
        assert_eq!(to_sequence(&single), vec![&single]);

        let many = json!([{"name": "A"}, {"name": "B"}]);
        assert_eq!(to_sequence(&many).len(), 2);

        assert!(to_sequence(&Value::Null).is_empty());
        assert!(to_sequence(&json!([])).is_empty());
    }

    #[test]
    fn test_extract_id() {
        assert_eq!(extract_id("http://arxiv.org/abs/2105.14022v1"), "2105.14022v1");
        assert_eq!(extract_id("http://arxiv.org/abs/hep-th/9901001v1"), "hep-th/9901001v1");
        assert_eq!(extract_id("2105.14022"), "2105.14022");
        assert_eq!(extract_id("http://arxiv.org/abs/"), "http://arxiv.org/abs/");
        assert_eq!(extract_id(""), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\tb\n\n c   d  "), "a b c d");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_single_and_wrapped_children_normalize_alike() {
        let bare = json!({
            "id": "http://arxiv.org/abs/1234.5678v1",
            "author": {"name": "Albert Einstein"},
            "category": {"@_term": "physics.gen-ph"},
            "link": {"@_title": "pdf", "@_href": "http://arxiv.org/pdf/1234.5678v1"}
        });
        let wrapped = json!({
            "id": "http://arxiv.org/abs/1234.5678v1",
            "author": [{"name": "Albert Einstein"}],
            "category": [{"@_term": "physics.gen-ph"}],
            "link": [{"@_title": "pdf", "@_href": "http://arxiv.org/pdf/1234.5678v1"}]
        });

        let a = paper_from_entry(&bare);
        let b = paper_from_entry(&wrapped);
        assert_eq!(a, b);
        assert_eq!(a.authors, vec!["Albert Einstein"]);
        assert_eq!(a.categories, vec!["physics.gen-ph"]);
        assert_eq!(a.pdf_url.as_deref(), Some("http://arxiv.org/pdf/1234.5678v1"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_empty() {
        let paper = paper_from_entry(&json!({}));
        assert_eq!(paper, Paper::default());
    }

    #[test]
    fn test_title_with_attributes_uses_text() {
        let entry = json!({"title": {"@_type": "html", "#text": "A\n  Title"}});
        assert_eq!(paper_from_entry(&entry).title, "A Title");
    }

    #[test]
    fn test_pdf_link_requires_title_marker() {
        let entry = json!({
            "link": [
                {"@_href": "http://arxiv.org/abs/1", "@_rel": "alternate"},
                {"@_href": "http://dx.doi.org/10.1/x", "@_title": "doi"}
            ]
        });
        assert_eq!(paper_from_entry(&entry).pdf_url, None);
    }

    #[test]
    fn test_feed_without_entries_is_empty() {
        assert!(normalize_tree(&json!({"feed": {"title": "ArXiv Query"}})).is_empty());
        assert!(normalize_tree(&json!({"feed": ""})).is_empty());
    }

    #[test]
    fn test_normalize_rejects_malformed_xml() {
        assert!(normalize("<feed><entry><id>x</id></feed>").is_err());
    }
}
