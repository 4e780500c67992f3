//! Generic XML tree built on `quick-xml` events.
//!
//! The tree is a `serde_json::Value`:
//! - an element with neither attributes nor children becomes its trimmed text,
//! - otherwise it becomes an object whose attributes live under [`ATTR_PREFIX`]
//!   keys, child elements under their qualified names and any text under
//!   [`TEXT_KEY`],
//! - a child name seen once maps to a single value, a name seen more than once
//!   maps to an array in document order.
//!
//! That last rule is why callers go through [`super::to_sequence`] for every
//! field that may repeat.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde_json::map::Entry;
use serde_json::{Map, Value};

use crate::error::ParseError;

/// Prefix that keeps attribute keys apart from child element names.
pub const ATTR_PREFIX: &str = "@_";

/// Key holding the text of an element that also has attributes or children.
pub const TEXT_KEY: &str = "#text";

/// Parse XML text into a tree keyed by the root element's name.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a single well-formed element tree.
pub fn parse(xml: &str) -> Result<Value, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                ensure_single_root(&stack, root.as_ref())?;
                stack.push(Element::open(&start)?);
            }
            Event::Empty(start) => {
                ensure_single_root(&stack, root.as_ref())?;
                let element = Element::open(&start)?;
                close(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                let element =
                    stack.pop().ok_or_else(|| ParseError::malformed("unexpected closing tag"))?;
                close(element, &mut stack, &mut root);
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                append_text(&mut stack, &String::from_utf8_lossy(&bytes))?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no data.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::malformed(format!("unclosed element <{}>", open.name)));
    }

    let (name, value) =
        root.ok_or_else(|| ParseError::malformed("document has no root element"))?;

    let mut tree = Map::new();
    tree.insert(name, value);
    Ok(Value::Object(tree))
}

/// An element whose closing tag has not been seen yet.
struct Element {
    name: String,
    attributes: Map<String, Value>,
    children: Map<String, Value>,
    text: String,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Result<Self, ParseError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref());
            let value = attr.unescape_value()?;
            attributes.insert(format!("{ATTR_PREFIX}{key}"), Value::String(value.into_owned()));
        }

        Ok(Self { name, attributes, children: Map::new(), text: String::new() })
    }

    /// Attach a closed child, promoting the slot to an array on repetition.
    fn push_child(&mut self, name: String, value: Value) {
        match self.children.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
        }
    }

    fn into_entry(self) -> (String, Value) {
        let text = self.text.trim();

        if self.attributes.is_empty() && self.children.is_empty() {
            return (self.name, Value::String(text.to_owned()));
        }

        let mut object = self.attributes;
        object.extend(self.children);
        if !text.is_empty() {
            object.insert(TEXT_KEY.to_owned(), Value::String(text.to_owned()));
        }

        (self.name, Value::Object(object))
    }
}

fn ensure_single_root(stack: &[Element], root: Option<&(String, Value)>) -> Result<(), ParseError> {
    if stack.is_empty() && root.is_some() {
        return Err(ParseError::malformed("multiple root elements"));
    }
    Ok(())
}

fn close(element: Element, stack: &mut [Element], root: &mut Option<(String, Value)>) {
    let (name, value) = element.into_entry();
    match stack.last_mut() {
        Some(parent) => parent.push_child(name, value),
        None => *root = Some((name, value)),
    }
}

fn append_text(stack: &mut [Element], text: &str) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ParseError::malformed("text outside the root element")),
    }
}
