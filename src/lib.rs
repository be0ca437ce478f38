//! PDF Font Audit Library
//!
//! Finds the fonts a PDF document uses and sorts them by licensing status.
//! This library provides functionality to:
//! - Discover fonts across every page of a PDF, de-duplicated by canonical name
//! - Normalize subset prefixes and hash-like name suffixes
//! - Classify fonts against a table of well-known free fonts
//! - Keep a registry of user-verified verdicts and a queue of fonts awaiting review
//!
//! # Example
//!
//! ```no_run
//! use pdf_font_audit::font::{analyze_pdf, classify};
//! use pdf_font_audit::pdf::LoadOptions;
//!
//! let bytes = std::fs::read("handout.pdf").expect("Failed to read PDF");
//! let result = analyze_pdf(&bytes, &LoadOptions::default());
//!
//! for font in &result.fonts {
//!     println!("{} -> {}", font.name, classify(&font.name).status);
//! }
//! ```

pub mod config;
pub mod error;
pub mod font;
pub mod pdf;
pub mod registry;
pub mod report;

// Re-export commonly used items
pub use error::{Error, Result};
