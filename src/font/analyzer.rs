//! Whole-document font analysis

use serde::Serialize;

use super::diagnostics::DiagnosticLog;
use super::scanner::{scan_page, DiscoveredFont, FontSet};
use crate::pdf::{LoadOptions, LopdfEngine, PdfEngine};

/// Fonts found in a document plus the trace of how they were found
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisResult {
    /// De-duplicated fonts in discovery order
    pub fonts: Vec<DiscoveredFont>,
    /// Diagnostic trace
    pub logs: DiagnosticLog,
}

/// Analyze a PDF with the lopdf engine
///
/// See [`analyze`] for failure behavior.
pub fn analyze_pdf(bytes: &[u8], options: &LoadOptions) -> AnalysisResult {
    analyze(&LopdfEngine, bytes, options)
}

/// Discover every font used by a document
///
/// Pages are scanned in order, 1 through N, all feeding one font set. This
/// never fails: if the document cannot be loaded, the error is recorded as a
/// `CRITICAL ERROR:` line and the result has no fonts. An empty font list with
/// such a line means the analysis failed, not that the document has no fonts.
///
/// # Example
///
/// ```no_run
/// use pdf_font_audit::font::analyze;
/// use pdf_font_audit::pdf::{LoadOptions, LopdfEngine};
///
/// let bytes = std::fs::read("slides.pdf").expect("Failed to read PDF");
/// let result = analyze(&LopdfEngine, &bytes, &LoadOptions::default());
/// for font in &result.fonts {
///     println!("{} ({}, embedded: {})", font.name, font.declared_type, font.embedded);
/// }
/// ```
pub fn analyze(engine: &dyn PdfEngine, bytes: &[u8], options: &LoadOptions) -> AnalysisResult {
    let mut log = DiagnosticLog::new();
    log.info(format!("Starting analysis ({} bytes)", bytes.len()));

    let document = match engine.load(bytes, options) {
        Ok(document) => document,
        Err(e) => {
            log.critical(e.to_string());
            return AnalysisResult {
                fonts: Vec::new(),
                logs: log,
            };
        }
    };

    let page_count = document.page_count();
    log.info(format!("Document loaded. Pages: {}", page_count));

    // Pages are addressed with u32 numbers
    let Ok(last_page) = u32::try_from(page_count) else {
        log.critical(format!("Page count {} exceeds the supported range", page_count));
        return AnalysisResult {
            fonts: Vec::new(),
            logs: log,
        };
    };

    let mut fonts = FontSet::new();

    for number in 1..=last_page {
        log.info(format!("Processing page {}...", number));

        let page = match document.page(number) {
            Ok(page) => page,
            Err(e) => {
                log.warn(format!("Failed to get page {}: {}", number, e));
                continue;
            }
        };

        let operators = match page.operator_list() {
            Ok(ops) => {
                log.info(format!(
                    "Page {} operator list loaded. Ops count: {}",
                    number,
                    ops.len()
                ));
                Some(ops)
            }
            Err(e) => {
                log.warn(format!("Failed to get operator list for page {}: {}", number, e));
                None
            }
        };

        scan_page(number, page.as_ref(), operators.as_ref(), &mut fonts, &mut log);
    }

    log.info(format!("Analysis complete. Found {} unique fonts.", fonts.len()));

    AnalysisResult {
        fonts: fonts.into_vec(),
        logs: log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::pdf::{DocumentHandle, ObjectStore, OperatorList, PageHandle, RawObjectTable};
    use serde_json::{json, Value};

    /// Page described entirely in memory
    #[derive(Clone, Default)]
    struct FakePage {
        /// `None` makes the operator list fail
        operators: Option<OperatorList>,
        local: RawObjectTable,
    }

    struct Store<'a>(&'a RawObjectTable);

    impl ObjectStore for Store<'_> {
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
            for (_, v) in self.0.iter() {
                visit(v);
            }
        }
    }

    struct FakeDocument {
        shared: RawObjectTable,
        pages: Vec<FakePage>,
    }

    struct PageView<'a> {
        shared: Store<'a>,
        local: Store<'a>,
        operators: Option<OperatorList>,
    }

    impl PageHandle for PageView<'_> {
        fn operator_list(&self) -> Result<OperatorList> {
            self.operators
                .clone()
                .ok_or_else(|| Error::OperatorList("stream is corrupt".to_string()))
        }
        fn shared_objects(&self) -> Option<&dyn ObjectStore> {
            Some(&self.shared)
        }
        fn local_objects(&self) -> Option<&dyn ObjectStore> {
            Some(&self.local)
        }
    }

    impl DocumentHandle for FakeDocument {
        fn page_count(&self) -> usize {
            self.pages.len()
        }
        fn page(&self, number: u32) -> Result<Box<dyn PageHandle + '_>> {
            let page = self
                .pages
                .get(number as usize - 1)
                .ok_or(Error::PageNotFound(number))?;
            Ok(Box::new(PageView {
                shared: Store(&self.shared),
                local: Store(&page.local),
                operators: page.operators.clone(),
            }))
        }
    }

    /// Engine that builds a fresh fake document per load, or fails
    struct FakeEngine {
        shared: RawObjectTable,
        pages: Vec<FakePage>,
        fail_with: Option<String>,
    }

    impl PdfEngine for FakeEngine {
        fn load(&self, _bytes: &[u8], _options: &LoadOptions) -> Result<Box<dyn DocumentHandle>> {
            if let Some(message) = &self.fail_with {
                return Err(Error::Load(message.clone()));
            }
            Ok(Box::new(FakeDocument {
                shared: self.shared.clone(),
                pages: self.pages.clone(),
            }))
        }
    }

    fn engine(shared: RawObjectTable, pages: Vec<FakePage>) -> FakeEngine {
        FakeEngine {
            shared,
            pages,
            fail_with: None,
        }
    }

    fn ops_selecting(id: &str) -> OperatorList {
        let mut ops = OperatorList::default();
        ops.push("Tf", vec![json!(id), json!(11)]);
        ops
    }

    #[test]
    fn test_zero_pages() {
        let result = analyze(&engine(RawObjectTable::new(), vec![]), b"%PDF", &LoadOptions::default());

        assert!(result.fonts.is_empty());
        assert!(result.logs.lines().iter().any(|l| l == "Document loaded. Pages: 0"));
        assert!(!result.logs.lines().iter().any(|l| l.starts_with("CRITICAL ERROR")));
    }

    #[test]
    fn test_load_failure_is_reported_not_raised() {
        let failing = FakeEngine {
            shared: RawObjectTable::new(),
            pages: vec![],
            fail_with: Some("Invalid file header".to_string()),
        };
        let result = analyze(&failing, b"garbage", &LoadOptions::default());

        assert!(result.fonts.is_empty());
        let last = result.logs.lines().last().unwrap();
        assert!(last.starts_with("CRITICAL ERROR: "));
        assert!(last.contains("Invalid file header"));
    }

    #[test]
    fn test_duplicates_across_pages_keep_first() {
        let shared: RawObjectTable = vec![(
            "f1",
            json!({ "name": "ABCDEF+Montserrat", "type": "TrueType", "file": "8 0 R" }),
        )]
        .into_iter()
        .collect();

        let second_page_local: RawObjectTable = vec![
            ("F1", json!({ "name": "GHIJKL+Montserrat", "type": "Type1" })),
            ("F2", json!({ "name": "Georgia", "type": "TrueType" })),
        ]
        .into_iter()
        .collect();

        let pages = vec![
            FakePage {
                operators: Some(ops_selecting("f1")),
                local: RawObjectTable::new(),
            },
            FakePage {
                operators: Some(OperatorList::default()),
                local: second_page_local,
            },
        ];

        let result = analyze(&engine(shared, pages), b"%PDF", &LoadOptions::default());

        assert_eq!(
            result.fonts,
            vec![
                DiscoveredFont {
                    name: "Montserrat".to_string(),
                    declared_type: "TrueType".to_string(),
                    embedded: true,
                },
                DiscoveredFont {
                    name: "Georgia".to_string(),
                    declared_type: "TrueType".to_string(),
                    embedded: false,
                },
            ]
        );
        assert!(result
            .logs
            .lines()
            .iter()
            .any(|l| l == "Analysis complete. Found 2 unique fonts."));
    }

    #[test]
    fn test_operator_list_failure_keeps_scanning() {
        let local: RawObjectTable = vec![("F1", json!({ "name": "Lato", "type": "TrueType" }))]
            .into_iter()
            .collect();
        let pages = vec![FakePage {
            operators: None,
            local,
        }];

        let result = analyze(&engine(RawObjectTable::new(), pages), b"%PDF", &LoadOptions::default());

        assert_eq!(result.fonts.len(), 1);
        assert_eq!(result.fonts[0].name, "Lato");
        assert!(result.logs.lines().iter().any(|l| {
            l.starts_with("Warning: Failed to get operator list for page 1") && l.contains("stream is corrupt")
        }));
    }

    /// Claims more pages than u32 page numbers can address
    struct OversizedDocument;

    impl DocumentHandle for OversizedDocument {
        fn page_count(&self) -> usize {
            usize::MAX
        }
        fn page(&self, number: u32) -> Result<Box<dyn PageHandle + '_>> {
            Err(Error::PageNotFound(number))
        }
    }

    struct OversizedEngine;

    impl PdfEngine for OversizedEngine {
        fn load(&self, _bytes: &[u8], _options: &LoadOptions) -> Result<Box<dyn DocumentHandle>> {
            Ok(Box::new(OversizedDocument))
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_page_count_beyond_u32_is_rejected() {
        let result = analyze(&OversizedEngine, b"%PDF", &LoadOptions::default());

        assert!(result.fonts.is_empty());
        let last = result.logs.lines().last().unwrap();
        assert!(last.starts_with("CRITICAL ERROR: Page count"));
        assert!(!result.logs.lines().iter().any(|l| l.starts_with("Processing page")));
    }

    #[test]
    fn test_result_serializes_with_external_field_names() {
        let local: RawObjectTable = vec![("F1", json!({ "name": "Inter", "type": "TrueType", "file": "2 0 R" }))]
            .into_iter()
            .collect();
        let pages = vec![FakePage {
            operators: Some(OperatorList::default()),
            local,
        }];

        let result = analyze(&engine(RawObjectTable::new(), pages), b"%PDF", &LoadOptions::default());
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value["fonts"],
            json!([{ "name": "Inter", "type": "TrueType", "embedded": true }])
        );
        assert!(value["logs"].as_array().unwrap().len() >= 3);
    }
}
