//! Font record extraction from engine objects
//!
//! Objects coming out of an engine's stores have no fixed shape. A font may
//! be described by a nested `data` container, by fields directly on the
//! object, or only by a `fontName`. The shapes are tried in that order and the
//! first one that yields a name wins.

use serde_json::{Map, Value};

/// Type label used when the object does not declare one
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Field that references an embedded font program
const FONT_FILE_FIELD: &str = "file";

/// Font identity as read from one engine object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    /// Name exactly as stored, before normalization
    pub raw_name: String,
    /// Declared type (e.g. `TrueType`, `Type0`), or [`UNKNOWN_TYPE`]
    pub declared_type: String,
    /// Whether a font program is attached
    pub embedded: bool,
}

/// Read a font record from an engine object
///
/// Returns `None` for objects that do not describe a font. This is the common
/// case when enumerating a store and is not an error.
pub fn extract(candidate: &Value) -> Option<FontRecord> {
    let object = candidate.as_object()?;

    nested_data(object)
        .or_else(|| direct_fields(object))
        .or_else(|| font_name_only(object))
}

/// `{ data: { name, type, file } }`
fn nested_data(object: &Map<String, Value>) -> Option<FontRecord> {
    let data = object.get("data")?.as_object()?;
    let name = text_field(data, "name")?;

    Some(FontRecord {
        raw_name: name.to_string(),
        declared_type: declared_type(data),
        embedded: has_font_file(data),
    })
}

/// `{ name, type, file }`
fn direct_fields(object: &Map<String, Value>) -> Option<FontRecord> {
    let name = text_field(object, "name")?;

    Some(FontRecord {
        raw_name: name.to_string(),
        declared_type: declared_type(object),
        embedded: has_font_file(object),
    })
}

/// `{ fontName }`
fn font_name_only(object: &Map<String, Value>) -> Option<FontRecord> {
    let name = text_field(object, "fontName")?;

    Some(FontRecord {
        raw_name: name.to_string(),
        declared_type: UNKNOWN_TYPE.to_string(),
        embedded: false,
    })
}

/// A non-empty string field
fn text_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn declared_type(object: &Map<String, Value>) -> String {
    text_field(object, "type")
        .unwrap_or(UNKNOWN_TYPE)
        .to_string()
}

fn has_font_file(object: &Map<String, Value>) -> bool {
    match object.get(FONT_FILE_FIELD) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
