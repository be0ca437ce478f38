//! License report for discovered fonts
//!
//! Puts a status next to every font: a recorded verdict when the registry has
//! one, the static classification otherwise. Fonts the classifier cannot place
//! can be queued for review along the way.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::Result;
use crate::font::{classify, license_search_url, DiscoveredFont, LicenseStatus};
use crate::registry::{PendingQueue, VerdictStore};

/// Where a font's status came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSource {
    /// Recorded by a user
    Registry,
    /// Built-in table of free fonts
    Static,
}

/// One font with its license status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontReport {
    #[serde(flatten)]
    pub font: DiscoveredFont,
    pub status: LicenseStatus,
    pub source: StatusSource,
    pub description: String,
    pub reference_url: String,
    /// Set when this report added the font to the pending queue
    pub queued: bool,
}

/// Resolve the status of one font name
pub fn resolve_status<S: VerdictStore + ?Sized>(
    store: &S,
    name: &str,
) -> (LicenseStatus, StatusSource) {
    match store.status(name) {
        Some(status) => (status, StatusSource::Registry),
        None => (classify(name).status, StatusSource::Static),
    }
}

/// Build the license report for a set of discovered fonts
///
/// With `enqueue_unknown`, fonts that have no verdict and that the static
/// classifier reports as `Unknown` are added to the pending queue.
pub fn build_report<R>(
    fonts: &[DiscoveredFont],
    registry: &mut R,
    enqueue_unknown: bool,
) -> Result<Vec<FontReport>>
where
    R: VerdictStore + PendingQueue + ?Sized,
{
    let mut reports = Vec::with_capacity(fonts.len());

    for font in fonts {
        let report = match registry.status(&font.name) {
            Some(status) => FontReport {
                font: font.clone(),
                status,
                source: StatusSource::Registry,
                description: "Verified by user.".to_string(),
                reference_url: license_search_url(&font.name),
                queued: false,
            },
            None => {
                let info = classify(&font.name);
                let queued = enqueue_unknown
                    && info.status == LicenseStatus::Unknown
                    && registry.add_pending(&font.name)?;

                FontReport {
                    font: font.clone(),
                    status: info.status,
                    source: StatusSource::Static,
                    description: info.description,
                    reference_url: info.reference_url,
                    queued,
                }
            }
        };
        reports.push(report);
    }

    Ok(reports)
}

/// Order reports for display: Commercial, then Unknown, then Free, by name within each
pub fn sort_for_display(reports: &mut [FontReport]) {
    reports.sort_by(|a, b| match priority(a.status).cmp(&priority(b.status)) {
        Ordering::Equal => a.font.name.cmp(&b.font.name),
        other => other,
    });
}

fn priority(status: LicenseStatus) -> u8 {
    match status {
        LicenseStatus::Commercial => 1,
        LicenseStatus::Unknown => 2,
        LicenseStatus::Free => 3,
    }
}
