//! One-shot version lookups against external registries
//!
//! Used by `new` (latest PocketBase release) and `version`/`upgrade` (latest
//! published onc). Both lookups are best-effort: scaffolding falls back to a
//! pinned PocketBase version and the update hint stays silent when the
//! registry is unreachable.

use std::time::Duration;

use regex::Regex;
use serde::Deserialize;

use crate::error::Result;
use crate::templates::FALLBACK_PB_VERSION;

const POCKETBASE_RELEASES_URL: &str =
    "https://api.github.com/repos/pocketbase/pocketbase/releases/latest";
const CRATES_IO_URL: &str = "https://crates.io/api/v1/crates/onc";

#[derive(Debug, Deserialize)]
struct GithubRelease {
    tag_name: String,
}

#[derive(Debug, Deserialize)]
struct CratesResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    max_stable_version: String,
}

fn client() -> Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("onc/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}

/// Latest PocketBase release, falling back to the pinned version on any
/// failure (network, deserialization, unexpected tag format).
pub fn latest_pocketbase_version() -> String {
    fetch_pocketbase_version().unwrap_or_else(|| FALLBACK_PB_VERSION.to_string())
}

fn fetch_pocketbase_version() -> Option<String> {
    let release: GithubRelease = client()
        .ok()?
        .get(POCKETBASE_RELEASES_URL)
        .send()
        .ok()?
        .error_for_status()
        .ok()?
        .json()
        .ok()?;
    extract_version(&release.tag_name)
}

/// Latest published onc version, or `None` when the registry cannot be
/// reached.
pub fn latest_onc_version() -> Option<String> {
    let response: CratesResponse = client()
        .ok()?
        .get(CRATES_IO_URL)
        .send()
        .ok()?
        .error_for_status()
        .ok()?
        .json()
        .ok()?;
    extract_version(&response.krate.max_stable_version)
}

/// Pull a bare `MAJOR.MINOR.PATCH` out of a tag, tolerating a `v` prefix.
fn extract_version(tag: &str) -> Option<String> {
    // Compiled per call; these lookups happen at most once per invocation.
    let re = Regex::new(r"^v?(\d+\.\d+\.\d+)").ok()?;
    re.captures(tag.trim())
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_version_strips_prefix() {
        assert_eq!(extract_version("v0.22.25"), Some("0.22.25".to_string()));
        assert_eq!(extract_version("0.22.25"), Some("0.22.25".to_string()));
    }

    #[test]
    fn test_extract_version_rejects_garbage() {
        assert_eq!(extract_version("latest"), None);
        assert_eq!(extract_version(""), None);
        assert_eq!(extract_version("v0.22"), None);
    }

    #[test]
    fn test_extract_version_tolerates_suffixes() {
        assert_eq!(extract_version("v0.23.0-rc1"), Some("0.23.0".to_string()));
    }
}
