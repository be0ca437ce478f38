//! Static license classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fonts that are system defaults or openly licensed
const COMMON_FREE_FONTS: &[&str] = &[
    // Standard web fonts
    "Arial",
    "Helvetica",
    "Times New Roman",
    "Times",
    "Courier New",
    "Courier",
    "Verdana",
    "Georgia",
    "Palatino",
    "Garamond",
    "Bookman",
    "Comic Sans MS",
    "Trebuchet MS",
    "Arial Black",
    "Impact",
    // Google Fonts
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Oswald",
    "Source Sans Pro",
    "Slabo 27px",
    "Raleway",
    "PT Sans",
    "Merriweather",
    "Noto Sans",
    "Nunito",
    "Concert One",
    "Prompt",
    "Work Sans",
    "Inter",
];

/// Appended to the font name in license search queries
/// ("font, whether PDF embedding is allowed")
const SEARCH_QUERY_SUFFIX: &str = " font 의 PDF 임베딩 허용 여부";

/// Licensing status of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseStatus {
    Free,
    Commercial,
    Unknown,
}

impl LicenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseStatus::Free => "Free",
            LicenseStatus::Commercial => "Commercial",
            LicenseStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(LicenseStatus::Free),
            "commercial" => Ok(LicenseStatus::Commercial),
            "unknown" => Ok(LicenseStatus::Unknown),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Candidate verdict for a font name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseInfo {
    pub status: LicenseStatus,
    pub description: String,
    /// Where to look the font up
    pub reference_url: String,
}

/// Classify a canonical font name against the table of free fonts
///
/// Style suffixes are ignored for the lookup: everything from the first `-`
/// or `,` is dropped, so `Arial-BoldMT` is looked up as `Arial`. Names not in
/// the table come back as [`LicenseStatus::Unknown`] with a search link.
/// The verdict registry is not consulted; see [`crate::report`] for that.
pub fn classify(name: &str) -> LicenseInfo {
    let family = family_name(name);

    if is_common_free_font(family) || is_common_free_font(name) {
        return LicenseInfo {
            status: LicenseStatus::Free,
            description: "Likely a standard system font or open source font.".to_string(),
            reference_url: format!(
                "https://fonts.google.com/?query={}",
                urlencoding::encode(family)
            ),
        };
    }

    LicenseInfo {
        status: LicenseStatus::Unknown,
        description: "License status could not be verified automatically.".to_string(),
        reference_url: license_search_url(name),
    }
}

/// Web search link for checking whether a font may be embedded in PDFs
pub fn license_search_url(name: &str) -> String {
    let query = format!("{}{}", name, SEARCH_QUERY_SUFFIX);
    format!(
        "https://www.google.com/search?q={}&udm=50",
        urlencoding::encode(&query)
    )
}

/// Name up to the first `-` or `,`, trimmed
fn family_name(name: &str) -> &str {
    name.split(['-', ','])
        .next()
        .unwrap_or(name)
        .trim()
}

fn is_common_free_font(name: &str) -> bool {
    COMMON_FREE_FONTS.contains(&name)
}
