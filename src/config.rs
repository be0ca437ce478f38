//! Configuration from the environment

use std::env;
use std::path::PathBuf;

use crate::pdf::LoadOptions;

/// Default registry file, created in the working directory
pub const DEFAULT_REGISTRY_FILE: &str = "fonts.json";

/// Runtime configuration for the CLI and library callers
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the verdict registry file
    pub registry_path: PathBuf,
    /// Options passed to the document engine
    pub load: LoadOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from(DEFAULT_REGISTRY_FILE),
            load: LoadOptions::default(),
        }
    }
}

impl Config {
    /// Build a configuration from `FONT_AUDIT_*` environment variables
    ///
    /// - `FONT_AUDIT_REGISTRY`: registry file path
    /// - `FONT_AUDIT_RESOURCE_URL`: auxiliary resource base URL
    /// - `FONT_AUDIT_ALLOW_NETWORK`: `1`, `true` or `yes` to allow network fetches
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let registry_path = lookup("FONT_AUDIT_REGISTRY")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY_FILE));

        let auxiliary_resource_base_url = lookup("FONT_AUDIT_RESOURCE_URL")
            .filter(|v| !v.trim().is_empty());

        let allow_network_fetch = lookup("FONT_AUDIT_ALLOW_NETWORK")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            registry_path,
            load: LoadOptions {
                auxiliary_resource_base_url,
                allow_network_fetch,
            },
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
