//! Per-page font discovery
//!
//! Three strategies run against every page, one after the other:
//!
//! - **operators**: each `Tf` operation names a font id, resolved in the
//!   shared object store
//! - **shared store**: every object in the document-wide store
//! - **page store**: every object in the page's own store
//!
//! They overlap on purpose. Engines populate their stores inconsistently, and
//! since results are keyed by canonical name, finding a font twice is harmless.
//! Nothing here fails the scan: missing stores, unreadable operator streams and
//! unresolved ids are recorded in the diagnostic log and skipped.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use super::diagnostics::DiagnosticLog;
use super::extract::extract;
use super::normalize::normalize;
use crate::pdf::{ObjectStore, OperatorList, PageHandle};

/// One font found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredFont {
    /// Canonical name, unique within one analysis
    pub name: String,
    /// Type label reported by the first object that named this font
    #[serde(rename = "type")]
    pub declared_type: String,
    /// Whether that object carried a font program
    pub embedded: bool,
}

/// Fonts discovered so far, in discovery order
///
/// The first font inserted under a canonical name is kept. Later ones with
/// the same name are refused, never merged.
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    fonts: Vec<DiscoveredFont>,
    names: HashSet<String>,
}

impl FontSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Insert a font unless its name is already present. Returns whether it was added.
    pub fn insert(&mut self, font: DiscoveredFont) -> bool {
        if !self.names.insert(font.name.clone()) {
            return false;
        }
        self.fonts.push(font);
        true
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiscoveredFont> {
        self.fonts.iter()
    }

    pub fn into_vec(self) -> Vec<DiscoveredFont> {
        self.fonts
    }
}

/// Run all discovery strategies against one page
///
/// `operators` is `None` when the page's operator list could not be read; the
/// operator strategy is then skipped and the store strategies still run.
pub fn scan_page(
    page_number: u32,
    page: &dyn PageHandle,
    operators: Option<&OperatorList>,
    fonts: &mut FontSet,
    log: &mut DiagnosticLog,
) {
    let mut scan = PageScan {
        page_number,
        fonts,
        log,
        added: 0,
        duplicates: 0,
    };

    if let Some(operators) = operators {
        scan.resolve_font_operators(operators, page.shared_objects());
    }

    match page.shared_objects() {
        Some(store) => scan.enumerate(store, "shared objects"),
        None => scan.log.info(format!("Page {} has no shared object store", page_number)),
    }

    if let Some(store) = page.local_objects() {
        scan.enumerate(store, "page objects");
    }

    scan.log.info(format!(
        "Page {}: {} new font(s), {} repeat sighting(s) skipped",
        page_number, scan.added, scan.duplicates
    ));
}

struct PageScan<'a> {
    page_number: u32,
    fonts: &'a mut FontSet,
    log: &'a mut DiagnosticLog,
    added: usize,
    duplicates: usize,
}

impl PageScan<'_> {
    fn resolve_font_operators(&mut self, operators: &OperatorList, store: Option<&dyn ObjectStore>) {
        for selection in operators.font_selections() {
            let Some(id) = selection else {
                self.log.warn(format!(
                    "Page {} has a setFont operator without a font id",
                    self.page_number
                ));
                continue;
            };

            match store.and_then(|store| lookup(store, id)) {
                Some(object) => {
                    let source = format!("OperatorList(setFont) -> {}", id);
                    self.consider(&object, &source);
                }
                None => self.log.warn(format!(
                    "Found setFont operator for {} on page {} but could not resolve object",
                    id, self.page_number
                )),
            }
        }
    }

    fn enumerate(&mut self, store: &dyn ObjectStore, label: &str) {
        if store.supports_for_each() {
            store.for_each(&mut |object| self.consider(object, label));
        } else if let Some(table) = store.raw_table() {
            self.log.info(format!(
                "Using fallback raw table for {} on page {}. Keys: {}",
                label,
                self.page_number,
                table.len()
            ));
            let source = format!("{} (raw table)", label);
            for (_, object) in table.iter() {
                self.consider(object, &source);
            }
        } else {
            self.log.info(format!(
                "{} on page {} exist but offer no way to enumerate them",
                label, self.page_number
            ));
        }
    }

    fn consider(&mut self, candidate: &Value, source: &str) {
        let Some(record) = extract(candidate) else {
            return;
        };

        let normalized = normalize(&record.raw_name);

        if self.fonts.contains(&normalized.canonical) {
            self.duplicates += 1;
            tracing::trace!(
                page = self.page_number,
                font = %normalized.canonical,
                source,
                "font already discovered"
            );
            return;
        }

        if let Some(note) = normalized.note {
            self.log.info(note);
        }
        self.log.info(format!(
            "Found font: {} (Clean: {}, Type: {}) in {}",
            record.raw_name, normalized.canonical, record.declared_type, source
        ));

        self.fonts.insert(DiscoveredFont {
            name: normalized.canonical,
            declared_type: record.declared_type,
            embedded: record.embedded,
        });
        self.added += 1;
    }
}

/// Direct lookup when the store supports it, raw table otherwise
fn lookup(store: &dyn ObjectStore, id: &str) -> Option<Value> {
    if store.supports_get() {
        store.get(id)
    } else {
        store.raw_table().and_then(|table| table.get(id).cloned())
    }
}
