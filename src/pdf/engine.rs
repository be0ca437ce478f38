//! Document engine boundary
//!
//! Font discovery never touches the PDF format directly. It talks to an engine
//! through the traits in this module: an engine loads bytes into a document,
//! a document hands out pages, and a page exposes an operator list plus up to
//! two object stores (one shared across the document, one local to the page).
//!
//! Engines differ in what their object stores can do. Some offer direct lookup
//! and enumeration, older ones only expose the raw keyed table they keep
//! internally. [`ObjectStore`] models this as a capability probe so the scanner
//! can pick whichever access path exists.

use serde_json::Value;

use crate::error::Result;

/// Operator that selects the active font (`/F1 12 Tf`)
pub const SET_FONT_OPERATOR: &str = "Tf";

/// Options handed to the engine when loading a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Base URL for auxiliary resources (character maps, standard font data)
    pub auxiliary_resource_base_url: Option<String>,
    /// Whether the engine may fetch anything over the network
    pub allow_network_fetch: bool,
}

/// Loads raw document bytes
pub trait PdfEngine {
    /// Parse `bytes` into a document, failing with [`crate::Error::Load`] on
    /// malformed or unsupported input
    fn load(&self, bytes: &[u8], options: &LoadOptions) -> Result<Box<dyn DocumentHandle>>;
}

/// A loaded document
pub trait DocumentHandle {
    /// Number of pages
    fn page_count(&self) -> usize;

    /// Fetch a page by its 1-based index
    fn page(&self, number: u32) -> Result<Box<dyn PageHandle + '_>>;
}

/// A single page of a loaded document
pub trait PageHandle {
    /// The page's operator stream. Fails with [`crate::Error::OperatorList`]
    fn operator_list(&self) -> Result<OperatorList>;

    /// Object store shared by every page of the document
    fn shared_objects(&self) -> Option<&dyn ObjectStore>;

    /// Object store private to this page, if the engine keeps one
    fn local_objects(&self) -> Option<&dyn ObjectStore>;
}

/// Object store as exposed by an engine
///
/// Every method has a default that reports the capability as missing. An
/// adapter overrides the ones its engine actually supports.
pub trait ObjectStore {
    /// Whether [`ObjectStore::get`] is available
    fn supports_get(&self) -> bool {
        false
    }

    /// Look up an object by its engine id
    fn get(&self, _id: &str) -> Option<Value> {
        None
    }

    /// Whether [`ObjectStore::for_each`] is available
    fn supports_for_each(&self) -> bool {
        false
    }

    /// Visit every stored object
    fn for_each(&self, _visit: &mut dyn FnMut(&Value)) {}

    /// The engine's internal keyed table, used when neither method above exists
    fn raw_table(&self) -> Option<&RawObjectTable> {
        None
    }
}

/// Operation codes and their arguments, index-aligned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatorList {
    pub operation_codes: Vec<String>,
    pub operation_args: Vec<Vec<Value>>,
}

impl OperatorList {
    /// Append one operation
    pub fn push(&mut self, code: impl Into<String>, args: Vec<Value>) {
        self.operation_codes.push(code.into());
        self.operation_args.push(args);
    }

    pub fn len(&self) -> usize {
        self.operation_codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operation_codes.is_empty()
    }

    /// Ids passed to every "set active font" operation, in stream order
    ///
    /// An operation without a string first argument yields `None` so the
    /// caller can report it.
    pub fn font_selections(&self) -> Vec<Option<&str>> {
        self.operation_codes
            .iter()
            .enumerate()
            .filter(|(_, code)| code.as_str() == SET_FONT_OPERATOR)
            .map(|(i, _)| {
                self.operation_args
                    .get(i)
                    .and_then(|args| args.first())
                    .and_then(Value::as_str)
            })
            .collect()
    }
}

/// Keyed table of engine objects, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawObjectTable {
    entries: Vec<(String, Value)>,
}

impl RawObjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the object stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for RawObjectTable {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut table = RawObjectTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
