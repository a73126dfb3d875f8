//! End-to-end tests over the public API: JSON text in, XML out.

use xmlout::{json_to_document, Error, Map, Value};

const PROLOG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[test]
fn test_flat_document() -> Result<(), Error> {
    let xml = json_to_document(r#"{"name":"Alice","age":30}"#)?;
    assert_eq!(
        xml,
        format!("{PROLOG}<root><name>Alice</name><age>30</age></root>")
    );
    Ok(())
}

#[test]
fn test_nested_document() -> Result<(), Error> {
    let xml = json_to_document(r#"{"meta":{"title":"Home","tags":["a","b"]}}"#)?;
    assert_eq!(
        xml,
        format!("{PROLOG}<root><meta><title>Home</title><tags>a</tags><tags>b</tags></meta></root>")
    );
    Ok(())
}

#[test]
fn test_key_order_follows_input() -> Result<(), Error> {
    let xml = json_to_document(r#"{"z":1,"a":2}"#)?;
    assert_eq!(xml, format!("{PROLOG}<root><z>1</z><a>2</a></root>"));

    let swapped = json_to_document(r#"{"a":2,"z":1}"#)?;
    assert_ne!(xml, swapped);
    Ok(())
}

#[test]
fn test_colon_keys_are_sanitized() -> Result<(), Error> {
    let xml = json_to_document(r#"{"og:title":"Page"}"#)?;
    assert_eq!(xml, format!("{PROLOG}<root><og_title>Page</og_title></root>"));
    Ok(())
}

#[test]
fn test_markup_in_values_is_escaped() -> Result<(), Error> {
    let xml = json_to_document(r#"{"html":"<p>a & b</p>"}"#)?;
    assert_eq!(
        xml,
        format!("{PROLOG}<root><html>&lt;p&gt;a &amp; b&lt;/p&gt;</html></root>")
    );
    Ok(())
}

#[test]
fn test_null_value_renders_empty_element() -> Result<(), Error> {
    let xml = json_to_document(r#"{"v":null}"#)?;
    assert_eq!(xml, format!("{PROLOG}<root><v></v></root>"));
    Ok(())
}

#[test]
fn test_array_of_objects() -> Result<(), Error> {
    let xml = json_to_document(r#"{"link":[{"href":"/a"},{"href":"/b"}]}"#)?;
    assert_eq!(
        xml,
        format!(
            "{PROLOG}<root><link><href>/a</href></link><link><href>/b</href></link></root>"
        )
    );
    Ok(())
}

#[test]
fn test_empty_object_document() -> Result<(), Error> {
    let xml = json_to_document("{}")?;
    assert_eq!(xml, format!("{PROLOG}<root></root>"));
    Ok(())
}

#[test]
fn test_non_object_root_is_rejected() {
    assert!(matches!(
        json_to_document("[1,2,3]"),
        Err(Error::NonObjectRoot)
    ));
    assert!(matches!(
        json_to_document("\"scalar\""),
        Err(Error::NonObjectRoot)
    ));
}

#[test]
fn test_invalid_json_is_rejected() {
    assert!(matches!(json_to_document("{oops"), Err(Error::Json(_))));
}

#[test]
fn test_fragment_is_deterministic() {
    let mut map = Map::new();
    map.insert("a", Value::from("x"));
    map.insert("b", Value::Array(vec![Value::from(1i32), Value::Null]));
    assert_eq!(xmlout::fragment(&map), xmlout::fragment(&map));
}
