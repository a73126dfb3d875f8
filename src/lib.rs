//! xmlout - render structured JSON-like values as XML documents
//!
//! # Quick Start
//!
//! ```
//! use xmlout::{xml, Map};
//!
//! let mut map = Map::new();
//! map.insert("name", "Alice");
//! assert_eq!(xml::fragment(&map), "<name>Alice</name>");
//! ```
//!
//! A [`Map`] iterates in insertion order, and the serializer follows that
//! order, so the same entries inserted differently produce differently
//! ordered output.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod value;
pub use value::{Map, Value};

pub mod xml;
pub use xml::{document, escape_text, fragment, sanitize_name};

pub mod json;
pub use json::from_json_str;

/// Renders a JSON document as a complete XML document.
///
/// The JSON root must be an object, since element names come from keys;
/// anything else is [`Error::NonObjectRoot`]. The output carries the XML
/// prolog and a wrapping `root` element.
///
/// ```
/// # fn main() -> Result<(), xmlout::Error> {
/// let xml = xmlout::json_to_document(r#"{"name":"Alice"}"#)?;
/// assert_eq!(
///     xml,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root><name>Alice</name></root>"
/// );
/// # Ok(())
/// # }
/// ```
pub fn json_to_document(input: &str) -> Result<String> {
    match from_json_str(input)? {
        Value::Object(map) => Ok(xml::document(&map)),
        _ => Err(Error::NonObjectRoot),
    }
}
