//! Document engine backed by lopdf
//!
//! Object store layout:
//! - shared store: every font dictionary reachable from the page tree (page
//!   `/Font` resources and those of the Form XObjects a page draws) keyed by
//!   `"<num> <gen> R"` in page order, followed by the `/FontDescriptor`s of
//!   those fonts. `/Type` is not required on font dictionaries.
//! - local store: inline font dictionaries from the page's resources, keyed by
//!   resource name, and from its Form XObjects, keyed by `"<form>/<name>"`
//!
//! `Tf` operands are rewritten from the resource name (`/F1`) to the shared id
//! of the font object the resource points at, so operator-driven resolution can
//! look them up in the shared store.

use std::collections::HashSet;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId};
use serde_json::{Map, Value};

use super::engine::{
    DocumentHandle, LoadOptions, ObjectStore, OperatorList, PageHandle, PdfEngine,
    RawObjectTable, SET_FONT_OPERATOR,
};
use crate::error::{Error, Result};

/// Descriptor keys that carry an embedded font program
const FONT_FILE_KEYS: [&[u8]; 3] = [b"FontFile", b"FontFile2", b"FontFile3"];

/// Upper bound on page tree depth when looking for inherited resources
const MAX_TREE_DEPTH: usize = 32;

/// The lopdf engine
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfEngine;

impl PdfEngine for LopdfEngine {
    fn load(&self, bytes: &[u8], options: &LoadOptions) -> Result<Box<dyn DocumentHandle>> {
        if options.allow_network_fetch || options.auxiliary_resource_base_url.is_some() {
            // lopdf never leaves the document, nothing to configure
            tracing::debug!(
                base_url = ?options.auxiliary_resource_base_url,
                allow_network = options.allow_network_fetch,
                "auxiliary resource options ignored by lopdf engine"
            );
        }

        let doc = Document::load_mem(bytes).map_err(|e| Error::Load(e.to_string()))?;
        Ok(Box::new(LopdfDocument::new(doc)))
    }
}

/// A document loaded through lopdf
pub struct LopdfDocument {
    inner: Document,
    /// Page object ids in page order
    page_ids: Vec<ObjectId>,
    shared: FontTable,
}

impl LopdfDocument {
    pub fn new(inner: Document) -> Self {
        let page_ids: Vec<ObjectId> = inner.get_pages().into_values().collect();
        let shared = FontTable(collect_document_fonts(&inner, &page_ids));
        Self { inner, page_ids, shared }
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("page_count", &self.page_ids.len())
            .field("shared_fonts", &self.shared.0.len())
            .finish_non_exhaustive()
    }
}

impl DocumentHandle for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page(&self, number: u32) -> Result<Box<dyn PageHandle + '_>> {
        let page_id = number
            .checked_sub(1)
            .and_then(|index| self.page_ids.get(index as usize))
            .copied()
            .ok_or(Error::PageNotFound(number))?;

        let font_resources = page_font_resources(&self.inner, page_id);
        let reachable = reachable_font_resources(&self.inner, page_id);
        let local = FontTable(inline_fonts(&self.inner, &reachable));

        Ok(Box::new(LopdfPage {
            doc: self,
            page_id,
            font_resources,
            local,
        }))
    }
}

struct LopdfPage<'a> {
    doc: &'a LopdfDocument,
    page_id: ObjectId,
    /// Font resource name and the entry it maps to (reference or inline dictionary)
    font_resources: Vec<(String, Object)>,
    local: FontTable,
}

impl PageHandle for LopdfPage<'_> {
    fn operator_list(&self) -> Result<OperatorList> {
        let data = self
            .doc
            .inner
            .get_page_content(self.page_id)
            .map_err(|e| Error::OperatorList(e.to_string()))?;
        let content = Content::decode(&data).map_err(|e| Error::OperatorList(e.to_string()))?;

        let mut ops = OperatorList::default();
        for op in content.operations {
            let args = if op.operator == SET_FONT_OPERATOR {
                font_selection_args(&op.operands, &self.font_resources)
            } else {
                op.operands.iter().map(operand_value).collect()
            };
            ops.push(op.operator, args);
        }

        Ok(ops)
    }

    fn shared_objects(&self) -> Option<&dyn ObjectStore> {
        Some(&self.doc.shared)
    }

    fn local_objects(&self) -> Option<&dyn ObjectStore> {
        Some(&self.local)
    }
}

/// Object store with both direct lookup and enumeration
struct FontTable(RawObjectTable);

impl ObjectStore for FontTable {
    fn supports_get(&self) -> bool {
        true
    }

    fn get(&self, id: &str) -> Option<Value> {
        self.0.get(id).cloned()
    }

    fn supports_for_each(&self) -> bool {
        true
    }

    fn for_each(&self, visit: &mut dyn FnMut(&Value)) {
        for (_, value) in self.0.iter() {
            visit(value);
        }
    }
}

/// Shared id for an indirect object
fn ref_key(id: ObjectId) -> String {
    format!("{} {} R", id.0, id.1)
}

/// Follow one level of indirection
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Read a name or string entry as text
fn name_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::Name(bytes) | Object::String(bytes, _) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
        _ => None,
    }
}

/// Build the candidate objects for the shared store
///
/// Only fonts some page can reach are included, so orphaned objects left by
/// incremental updates are never reported.
fn collect_document_fonts(doc: &Document, page_ids: &[ObjectId]) -> RawObjectTable {
    let mut table = RawObjectTable::new();
    let mut seen = HashSet::new();
    let mut descriptors = Vec::new();

    for &page_id in page_ids {
        for (_, entry) in reachable_font_resources(doc, page_id) {
            // Inline dictionaries belong to the page's local store
            let Object::Reference(id) = entry else {
                continue;
            };
            if !seen.insert(id) {
                continue;
            }
            let Some(font) = doc.get_object(id).ok().and_then(|obj| obj.as_dict().ok()) else {
                continue;
            };

            table.insert(ref_key(id), font_candidate(doc, font));
            descriptors.extend(descriptor_names(doc, font));
        }
    }

    // Descriptors carry less information, keep them behind the fonts
    for (id, font_name) in descriptors {
        if seen.insert(id) {
            let mut fields = Map::new();
            fields.insert("fontName".to_string(), Value::String(font_name));
            table.insert(ref_key(id), Value::Object(fields));
        }
    }

    table
}

/// Indirect descriptors of a font and of its first descendant, with their `/FontName`
fn descriptor_names(doc: &Document, font: &Dictionary) -> Vec<(ObjectId, String)> {
    let mut fonts = vec![font];
    fonts.extend(first_descendant(doc, font));

    fonts
        .into_iter()
        .filter_map(|font| {
            let id = font.get(b"FontDescriptor").ok()?.as_reference().ok()?;
            let descriptor = doc.get_object(id).ok()?.as_dict().ok()?;
            Some((id, name_entry(descriptor, b"FontName")?))
        })
        .collect()
}

/// Describe a font dictionary in the shape the extractor reads
///
/// Composite (`Type0`) fonts get their first descendant nested under `data`,
/// since the descendant carries the cleaner name and the font program.
fn font_candidate(doc: &Document, font: &Dictionary) -> Value {
    let mut candidate = font_fields(doc, font);

    if name_entry(font, b"Subtype").as_deref() == Some("Type0") {
        if let Some(descendant) = first_descendant(doc, font) {
            let data = font_fields(doc, descendant);
            if let Some(file) = data.get("file").cloned() {
                candidate.insert("file".to_string(), file);
            }
            candidate.insert("data".to_string(), Value::Object(data));
        }
    }

    Value::Object(candidate)
}

fn font_fields(doc: &Document, font: &Dictionary) -> Map<String, Value> {
    let mut fields = Map::new();

    match name_entry(font, b"BaseFont") {
        Some(base_font) => {
            fields.insert("name".to_string(), Value::String(base_font));
        }
        None => {
            // Type3 fonts may only carry /Name
            if let Some(name) = name_entry(font, b"Name") {
                fields.insert("fontName".to_string(), Value::String(name));
            }
        }
    }

    if let Some(subtype) = name_entry(font, b"Subtype") {
        fields.insert("type".to_string(), Value::String(subtype));
    }

    if let Some(file) = font_program(doc, font) {
        fields.insert("file".to_string(), Value::String(file));
    }

    fields
}

fn first_descendant<'a>(doc: &'a Document, font: &'a Dictionary) -> Option<&'a Dictionary> {
    let descendants = resolve(doc, font.get(b"DescendantFonts").ok()?)?;
    let Object::Array(items) = descendants else {
        return None;
    };
    resolve(doc, items.first()?)?.as_dict().ok()
}

/// Locate the embedded font program referenced by the font's descriptor
fn font_program(doc: &Document, font: &Dictionary) -> Option<String> {
    let descriptor = resolve(doc, font.get(b"FontDescriptor").ok()?)?
        .as_dict()
        .ok()?;

    FONT_FILE_KEYS.iter().find_map(|key| match descriptor.get(*key).ok()? {
        Object::Reference(id) => Some(ref_key(*id)),
        _ => Some("inline".to_string()),
    })
}

/// Resources of a page, inherited from the page tree when the page has none
fn inherited_resources(doc: &Document, page_id: ObjectId) -> Option<&Dictionary> {
    let mut node = doc.get_object(page_id).ok()?.as_dict().ok()?;

    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(resources) = node.get(b"Resources") {
            return resolve(doc, resources)?.as_dict().ok();
        }
        let parent = node.get(b"Parent").ok()?.as_reference().ok()?;
        node = doc.get_object(parent).ok()?.as_dict().ok()?;
    }

    None
}

/// Entries of a `/Font` resource dictionary
fn font_entries(doc: &Document, resources: &Dictionary) -> Vec<(String, Object)> {
    let fonts = resources
        .get(b"Font")
        .ok()
        .and_then(|fonts| resolve(doc, fonts))
        .and_then(|fonts| fonts.as_dict().ok());

    match fonts {
        Some(fonts) => fonts
            .iter()
            .map(|(name, entry)| (String::from_utf8_lossy(name).into_owned(), entry.clone()))
            .collect(),
        None => Vec::new(),
    }
}

/// Entries of the page's own `/Font` resource dictionary
fn page_font_resources(doc: &Document, page_id: ObjectId) -> Vec<(String, Object)> {
    inherited_resources(doc, page_id)
        .map(|resources| font_entries(doc, resources))
        .unwrap_or_default()
}

/// Font entries of the page and of every Form XObject it draws
fn reachable_font_resources(doc: &Document, page_id: ObjectId) -> Vec<(String, Object)> {
    let Some(resources) = inherited_resources(doc, page_id) else {
        return Vec::new();
    };
    let mut entries = font_entries(doc, resources);
    entries.extend(form_font_resources(doc, resources));
    entries
}

/// Font entries of the Form XObjects drawn from `resources`, nested forms
/// included. Names are prefixed with the XObject path (`"Fm1/F1"`).
fn form_font_resources(doc: &Document, resources: &Dictionary) -> Vec<(String, Object)> {
    let mut entries = Vec::new();
    let mut visited = HashSet::new();
    collect_form_fonts(doc, resources, "", 0, &mut visited, &mut entries);
    entries
}

fn collect_form_fonts(
    doc: &Document,
    resources: &Dictionary,
    prefix: &str,
    depth: usize,
    visited: &mut HashSet<ObjectId>,
    entries: &mut Vec<(String, Object)>,
) {
    if depth >= MAX_TREE_DEPTH {
        return;
    }
    let Some(xobjects) = resources
        .get(b"XObject")
        .ok()
        .and_then(|xobjects| resolve(doc, xobjects))
        .and_then(|xobjects| xobjects.as_dict().ok())
    else {
        return;
    };

    for (name, entry) in xobjects.iter() {
        // XObjects are streams, which are always indirect
        let Object::Reference(id) = entry else {
            continue;
        };
        if !visited.insert(*id) {
            continue;
        }
        let Ok(Object::Stream(form)) = doc.get_object(*id) else {
            continue;
        };
        if name_entry(&form.dict, b"Subtype").as_deref() != Some("Form") {
            continue;
        }
        let Some(form_resources) = form
            .dict
            .get(b"Resources")
            .ok()
            .and_then(|r| resolve(doc, r))
            .and_then(|r| r.as_dict().ok())
        else {
            continue;
        };

        let path = format!("{}{}/", prefix, String::from_utf8_lossy(name));
        entries.extend(
            font_entries(doc, form_resources)
                .into_iter()
                .map(|(font, entry)| (format!("{}{}", path, font), entry)),
        );
        collect_form_fonts(doc, form_resources, &path, depth + 1, visited, entries);
    }
}

/// Font dictionaries written directly into the page resources
fn inline_fonts(doc: &Document, font_resources: &[(String, Object)]) -> RawObjectTable {
    font_resources
        .iter()
        .filter_map(|(name, entry)| match entry {
            Object::Dictionary(dict) => Some((name.clone(), font_candidate(doc, dict))),
            _ => None,
        })
        .collect()
}

/// Arguments of a `Tf` operation, with the resource name mapped to its shared id
fn font_selection_args(operands: &[Object], font_resources: &[(String, Object)]) -> Vec<Value> {
    let mut args: Vec<Value> = operands.iter().map(operand_value).collect();

    if let Some(Object::Name(name)) = operands.first() {
        let name = String::from_utf8_lossy(name);
        let target = font_resources
            .iter()
            .find(|(resource, _)| *resource == name)
            .map(|(_, entry)| entry);

        if let Some(Object::Reference(id)) = target {
            args[0] = Value::String(ref_key(*id));
        }
    }

    args
}

fn operand_value(obj: &Object) -> Value {
    match obj {
        Object::Null => Value::Null,
        Object::Boolean(b) => Value::Bool(*b),
        Object::Integer(i) => Value::from(*i),
        Object::Real(r) => Value::from(*r),
        Object::Name(bytes) | Object::String(bytes, _) => {
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
        Object::Array(items) => Value::Array(items.iter().map(operand_value).collect()),
        Object::Reference(id) => Value::String(ref_key(*id)),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Stream};
    use serde_json::json;

    /// One page using an embedded composite font (via reference) and an
    /// inline Type1 font, with resources inherited from the page tree.
    fn build_document() -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_file_id = doc.add_object(Stream::new(dictionary! {}, vec![0u8; 16]));
        let descriptor_id = doc.add_object(dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => "ABCDEF+NanumGothic",
            "FontFile2" => font_file_id,
        });
        let descendant_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "CIDFontType2",
            "BaseFont" => "ABCDEF+NanumGothic",
            "FontDescriptor" => descriptor_id,
        });
        let type0_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => "ABCDEF+NanumGothic-Identity-H",
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![Object::from(descendant_id)],
        });

        let content = b"BT /F1 12 Tf (A) Tj /F2 10 Tf (B) Tj /F9 8 Tf ET";
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.to_vec()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::from(page_id)],
                "Count" => 1i64,
                "Resources" => dictionary! {
                    "Font" => dictionary! {
                        "F1" => type0_id,
                        "F2" => dictionary! {
                            "Type" => "Font",
                            "Subtype" => "Type1",
                            "BaseFont" => "Helvetica",
                        },
                    },
                },
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_load_rejects_garbage() {
        let result = LopdfEngine.load(b"definitely not a pdf", &LoadOptions::default());
        assert!(matches!(result, Err(Error::Load(_))));
    }

    #[test]
    fn test_page_numbers_are_one_based() {
        let doc = LopdfDocument::new(build_document());
        assert_eq!(doc.page_count(), 1);
        assert!(doc.page(1).is_ok());
        assert!(matches!(doc.page(0), Err(Error::PageNotFound(0))));
        assert!(matches!(doc.page(2), Err(Error::PageNotFound(2))));
    }

    #[test]
    fn test_shared_store_lists_fonts_before_descriptors() {
        let doc = LopdfDocument::new(build_document());
        let mut seen = Vec::new();
        doc.shared.for_each(&mut |value| seen.push(value.clone()));

        // The descendant is only reachable through its Type0 parent
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0]["name"], json!("ABCDEF+NanumGothic-Identity-H"));
        assert_eq!(seen[1], json!({ "fontName": "ABCDEF+NanumGothic" }));
    }

    /// One page drawing with `/F1`, using the given font and XObject resources
    fn single_page(mut doc: Document, fonts: Dictionary, xobjects: Dictionary) -> Document {
        let pages_id = doc.new_object_id();
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            b"BT /F1 12 Tf (A) Tj ET /Fm1 Do".to_vec(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! { "Font" => fonts, "XObject" => xobjects },
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::from(page_id)],
                "Count" => 1i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn shared_names(doc: &LopdfDocument) -> Vec<String> {
        let mut names = Vec::new();
        doc.shared.for_each(&mut |value| {
            if let Some(name) = value.get("name").and_then(Value::as_str) {
                names.push(name.to_string());
            }
        });
        names
    }

    #[test]
    fn test_unreferenced_fonts_are_not_shared() {
        let mut doc = Document::with_version("1.5");
        let font_file_id = doc.add_object(Stream::new(dictionary! {}, vec![0u8; 16]));
        let orphan_descriptor_id = doc.add_object(dictionary! {
            "Type" => "FontDescriptor",
            "FontName" => "ABCDEF+HelveticaNeue-Commercial",
            "FontFile2" => font_file_id,
        });
        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "TrueType",
            "BaseFont" => "ABCDEF+HelveticaNeue-Commercial",
            "FontDescriptor" => orphan_descriptor_id,
        });
        let helvetica_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let doc = LopdfDocument::new(single_page(
            doc,
            dictionary! { "F1" => helvetica_id },
            dictionary! {},
        ));

        assert_eq!(shared_names(&doc), vec!["Helvetica"]);
        let mut count = 0;
        doc.shared.for_each(&mut |_| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_font_without_type_entry_resolves() {
        let mut doc = Document::with_version("1.5");
        let font_id = doc.add_object(dictionary! {
            "Subtype" => "TrueType",
            "BaseFont" => "ABCDEF+Inter-Bold",
        });
        let doc = LopdfDocument::new(single_page(doc, dictionary! { "F1" => font_id }, dictionary! {}));
        let page = doc.page(1).unwrap();
        let ops = page.operator_list().unwrap();

        let id = ops.font_selections()[0].unwrap().to_string();
        assert_eq!(id, ref_key(font_id));
        let candidate = page.shared_objects().unwrap().get(&id).unwrap();
        assert_eq!(candidate, json!({ "name": "ABCDEF+Inter-Bold", "type": "TrueType" }));
    }

    #[test]
    fn test_form_xobject_fonts_are_reachable() {
        let mut doc = Document::with_version("1.5");
        let helvetica_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let georgia_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "TrueType",
            "BaseFont" => "Georgia",
        });
        let form_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Form",
                "BBox" => vec![0.into(), 0.into(), 100.into(), 100.into()],
                "Resources" => dictionary! {
                    "Font" => dictionary! {
                        "F1" => georgia_id,
                        "F2" => dictionary! {
                            "Type" => "Font",
                            "Subtype" => "Type1",
                            "BaseFont" => "Courier",
                        },
                    },
                },
            },
            b"BT /F1 8 Tf (x) Tj /F2 8 Tf (y) Tj ET".to_vec(),
        ));
        let doc = LopdfDocument::new(single_page(
            doc,
            dictionary! { "F1" => helvetica_id },
            dictionary! { "Fm1" => form_id },
        ));

        assert_eq!(shared_names(&doc), vec!["Helvetica", "Georgia"]);

        let page = doc.page(1).unwrap();
        let courier = page.local_objects().unwrap().get("Fm1/F2").unwrap();
        assert_eq!(courier["name"], json!("Courier"));
        // Page content names still map to the page's own resources
        let ops = page.operator_list().unwrap();
        assert_eq!(ops.font_selections()[0], Some(ref_key(helvetica_id).as_str()));
    }

    #[test]
    fn test_type0_candidate_nests_descendant() {
        let doc = LopdfDocument::new(build_document());
        let page = doc.page(1).unwrap();
        let ops = page.operator_list().unwrap();

        let selections = ops.font_selections();
        assert_eq!(selections.len(), 3);
        let shared_id = selections[0].unwrap();
        assert!(shared_id.ends_with(" R"));

        let candidate = page.shared_objects().unwrap().get(shared_id).unwrap();
        assert_eq!(candidate["name"], json!("ABCDEF+NanumGothic-Identity-H"));
        assert_eq!(candidate["type"], json!("Type0"));
        assert_eq!(candidate["data"]["name"], json!("ABCDEF+NanumGothic"));
        assert_eq!(candidate["data"]["type"], json!("CIDFontType2"));
        assert!(candidate["data"].get("file").is_some());
        assert!(candidate.get("file").is_some());
    }

    #[test]
    fn test_inline_fonts_stay_local() {
        let doc = LopdfDocument::new(build_document());
        let page = doc.page(1).unwrap();
        let ops = page.operator_list().unwrap();

        // Inline and unknown resources keep their resource names
        let selections = ops.font_selections();
        assert_eq!(selections[1], Some("F2"));
        assert_eq!(selections[2], Some("F9"));
        assert!(page.shared_objects().unwrap().get("F2").is_none());

        let local = page.local_objects().unwrap();
        let helvetica = local.get("F2").unwrap();
        assert_eq!(helvetica, json!({ "name": "Helvetica", "type": "Type1" }));
    }

    #[test]
    fn test_non_font_operands_are_converted() {
        assert_eq!(operand_value(&Object::Integer(12)), json!(12));
        assert_eq!(operand_value(&Object::Name(b"F1".to_vec())), json!("F1"));
        assert_eq!(operand_value(&Object::Reference((4, 0))), json!("4 0 R"));
        assert_eq!(operand_value(&Object::Boolean(true)), json!(true));
    }
}
