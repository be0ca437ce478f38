//! Font discovery and classification

pub mod analyzer;
pub mod classify;
pub mod diagnostics;
pub mod extract;
pub mod normalize;
pub mod scanner;

// Re-export commonly used items
pub use analyzer::{analyze, analyze_pdf, AnalysisResult};
pub use classify::{classify, license_search_url, LicenseInfo, LicenseStatus};
pub use diagnostics::DiagnosticLog;
pub use extract::{extract, FontRecord, UNKNOWN_TYPE};
pub use normalize::{normalize, NormalizedName};
pub use scanner::{scan_page, DiscoveredFont, FontSet};
