//! Verdict registry and pending review queue
//!
//! User-verified license verdicts and the fonts still waiting for one are kept
//! together in a single JSON file. A missing file is an empty registry. Every
//! mutation is written back immediately through a temporary file and a rename.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::font::LicenseStatus;

/// Lookup and storage of license verdicts
pub trait VerdictStore {
    /// Verdict recorded for `name`, if any
    fn status(&self, name: &str) -> Option<LicenseStatus>;

    /// Record or replace the verdict for `name`
    fn set_status(&mut self, name: &str, status: LicenseStatus) -> Result<()>;
}

/// Fonts awaiting a human verdict
pub trait PendingQueue {
    /// Queue `name` for review. Returns `false` if it already has a verdict or
    /// is already queued, in which case nothing changes.
    fn add_pending(&mut self, name: &str) -> Result<bool>;

    /// Queued fonts, oldest first
    fn pending(&self) -> &[PendingFont];

    /// Remove `name` from the queue. Returns whether it was queued.
    fn remove_pending(&mut self, name: &str) -> Result<bool>;

    /// Empty the queue, returning how many entries were removed
    fn clear_pending(&mut self) -> Result<usize>;
}

/// A recorded license verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub name: String,
    pub status: LicenseStatus,
    pub updated_at: DateTime<Utc>,
}

/// A font waiting for review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFont {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RegistryData {
    #[serde(default)]
    verdicts: Vec<Verdict>,
    #[serde(default)]
    pending: Vec<PendingFont>,
}

/// File-backed registry of verdicts and pending fonts
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    /// `None` keeps everything in memory
    path: Option<PathBuf>,
    data: RegistryData,
}

impl FontRegistry {
    /// Open the registry stored at `path`, starting empty if the file does not exist
    pub fn open(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(path)?;
            if contents.trim().is_empty() {
                RegistryData::default()
            } else {
                serde_json::from_str(&contents)?
            }
        } else {
            RegistryData::default()
        };

        tracing::debug!(
            path = %path.display(),
            verdicts = data.verdicts.len(),
            pending = data.pending.len(),
            "opened font registry"
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    /// A registry that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Recorded verdicts whose name contains `search` (case-insensitive),
    /// most recently updated first
    pub fn verdicts(&self, search: Option<&str>) -> Vec<&Verdict> {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut verdicts: Vec<&Verdict> = self
            .data
            .verdicts
            .iter()
            .filter(|v| match &needle {
                Some(needle) => v.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect();

        verdicts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        verdicts
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl VerdictStore for FontRegistry {
    fn status(&self, name: &str) -> Option<LicenseStatus> {
        self.data
            .verdicts
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.status)
    }

    fn set_status(&mut self, name: &str, status: LicenseStatus) -> Result<()> {
        let now = Utc::now();

        match self.data.verdicts.iter_mut().find(|v| v.name == name) {
            Some(existing) => {
                existing.status = status;
                existing.updated_at = now;
            }
            None => self.data.verdicts.push(Verdict {
                name: name.to_string(),
                status,
                updated_at: now,
            }),
        }

        // A verdict settles the review
        self.data.pending.retain(|p| p.name != name);

        tracing::info!(font = name, %status, "recorded license verdict");
        self.save()
    }
}

impl PendingQueue for FontRegistry {
    fn add_pending(&mut self, name: &str) -> Result<bool> {
        if self.status(name).is_some() || self.data.pending.iter().any(|p| p.name == name) {
            return Ok(false);
        }

        self.data.pending.push(PendingFont {
            name: name.to_string(),
            created_at: Utc::now(),
        });
        tracing::debug!(font = name, "queued font for review");
        self.save()?;
        Ok(true)
    }

    fn pending(&self) -> &[PendingFont] {
        &self.data.pending
    }

    fn remove_pending(&mut self, name: &str) -> Result<bool> {
        let before = self.data.pending.len();
        self.data.pending.retain(|p| p.name != name);

        if self.data.pending.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn clear_pending(&mut self) -> Result<usize> {
        let removed = self.data.pending.len();
        if removed > 0 {
            self.data.pending.clear();
            self.save()?;
        }
        Ok(removed)
    }
}
