//! PDF document engine module

pub mod engine;
pub mod lopdf_engine;

// Re-export commonly used items
pub use engine::{
    DocumentHandle, LoadOptions, ObjectStore, OperatorList, PageHandle, PdfEngine,
    RawObjectTable, SET_FONT_OPERATOR,
};
pub use lopdf_engine::{LopdfDocument, LopdfEngine};
