//! Font name normalization
//!
//! Turns the raw name a PDF stores for a font into the canonical name used to
//! de-duplicate discoveries:
//!
//! 1. Subset prefixes are removed: `ABCDEF+Arial-BoldMT` becomes `Arial-BoldMT`.
//! 2. Short hash-like suffixes are removed from all-lowercase names:
//!    `nanumgtm51` becomes `nanumgtm`. Some CJK font families are embedded
//!    with such suffixes. Names containing an uppercase letter are left alone,
//!    so `MalgunGothic` or `KoPubWorldDotumBold` never lose their last letters.

use std::sync::LazyLock;

use regex::Regex;

/// Letters followed by one to three hex digits, nothing else
static HEX_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)([0-9A-Fa-f]{1,3})$").expect("valid pattern"));

/// Result of normalizing a raw font name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// De-duplication key and display name
    pub canonical: String,
    /// Set when the hex suffix heuristic changed the name
    pub note: Option<String>,
}

/// Normalize a raw font name
///
/// # Example
///
/// ```
/// use pdf_font_audit::font::normalize;
///
/// assert_eq!(normalize("ABCDEF+Arial-BoldMT").canonical, "Arial-BoldMT");
/// assert_eq!(normalize("nanumgtm51").canonical, "nanumgtm");
/// assert_eq!(normalize("MalgunGothic").canonical, "MalgunGothic");
/// ```
pub fn normalize(raw_name: &str) -> NormalizedName {
    let name = strip_subset_prefix(raw_name);

    if let Some(caps) = HEX_SUFFIX.captures(name) {
        let prefix = &caps[1];
        let suffix = &caps[2];

        if is_lowercase_letters(prefix) && suffix.chars().all(|c| c.is_ascii_hexdigit()) {
            return NormalizedName {
                canonical: prefix.to_string(),
                note: Some(format!(
                    "Stripped hex suffix '{}' from '{}' (now '{}')",
                    suffix, name, prefix
                )),
            };
        }
    }

    NormalizedName {
        canonical: name.to_string(),
        note: None,
    }
}

/// Everything after the first `+`, or the whole name when there is none
fn strip_subset_prefix(raw_name: &str) -> &str {
    match raw_name.split_once('+') {
        Some((_, rest)) => rest,
        None => raw_name,
    }
}

fn is_lowercase_letters(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_lowercase())
}
