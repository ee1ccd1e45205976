use anyhow::Result;
use bumpgate_core::{ManifestKind, Reporter};

use crate::{maven::version_from_maven, package_json::version_from_package_json};

/// Determine the manifest kind from the file name and extract its version.
///
/// An unrecognized file name is reported through the failure sink and
/// yields `Ok(None)` so the caller can keep going and still fail the run;
/// malformed content in a recognized manifest is a hard error.
///
/// # Errors
/// Returns error if a recognized manifest cannot be parsed or holds no version.
pub fn project_version(
    content: &str,
    file_name_or_path: &str,
    property: Option<&str>,
    reporter: &dyn Reporter,
) -> Result<Option<String>> {
    let Some(kind) = ManifestKind::from_file_name(file_name_or_path) else {
        reporter.fail(&format!("\"{file_name_or_path}\" is not supported!"));
        return Ok(None);
    };
    let version = match kind {
        ManifestKind::Maven => version_from_maven(content, property)?,
        ManifestKind::PackageJson => version_from_package_json(content)?,
        ManifestKind::VersionTxt => content.trim().to_string(),
    };
    Ok(Some(version))
}
