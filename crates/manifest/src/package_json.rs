use anyhow::{Context, Result};
use serde::Deserialize;

/// The subset of package.json this check cares about. A missing `version`
/// field is a deserialization error, not a silent absence.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: String,
}

/// Extract the `version` field from package.json content.
///
/// # Errors
/// Returns error if the content is not valid JSON or has no `version` field.
pub fn version_from_package_json(content: &str) -> Result<String> {
    let manifest: PackageManifest =
        serde_json::from_str(content).context("Failed to parse package.json")?;
    Ok(manifest.version)
}
