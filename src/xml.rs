//! XML serialization of structured values
//!
//! A [`Map`] serializes to a flat fragment of sibling elements, one per
//! entry, in insertion order. Every value becomes element content; the
//! output carries no attributes and no prolog unless wrapped by
//! [`document`].

use crate::value::{Map, Value};

/// Escapes characters that are significant in XML element content.
///
/// `&` is replaced first so the entities introduced by the later
/// replacements are not themselves escaped. Input that is already escaped
/// gets escaped again: `escape_text("&amp;")` yields `&amp;amp;`.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Replaces every `:` with `_` so a key cannot produce a
/// namespace-qualified element name.
pub fn sanitize_name(name: &str) -> String {
    name.replace(':', "_")
}

/// Serializes a map as an XML fragment.
///
/// Pure and total: equal maps with equal insertion order always produce the
/// same string, and no input fails. An empty map produces an empty string.
pub fn fragment(map: &Map) -> String {
    let mut out = String::new();
    write_fragment(map, &mut out);
    out
}

/// Wraps [`fragment`] output in the XML prolog and a `root` element,
/// producing a complete document.
pub fn document(map: &Map) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>");
    write_fragment(map, &mut out);
    out.push_str("</root>");
    out
}

fn write_fragment(map: &Map, out: &mut String) {
    for (key, value) in map {
        let tag = escape_text(&sanitize_name(key));
        write_entry(&tag, value, out);
    }
}

fn write_entry(tag: &str, value: &Value, out: &mut String) {
    match value {
        // One sibling element per item, all sharing the tag. An item that
        // is itself an array flattens into further siblings instead of
        // introducing an element level.
        Value::Array(items) => {
            for item in items {
                write_entry(tag, item, out);
            }
        }
        Value::Object(inner) => {
            open_tag(tag, out);
            write_fragment(inner, out);
            close_tag(tag, out);
        }
        scalar => {
            open_tag(tag, out);
            out.push_str(&escape_text(&scalar_text(scalar)));
            close_tag(tag, out);
        }
    }
}

fn open_tag(tag: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Text rendering of a scalar. Null renders as the empty string, so an
/// absent value becomes an empty element rather than an omitted one.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Containers are dispatched in write_entry
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}
