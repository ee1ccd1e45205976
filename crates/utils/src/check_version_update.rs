use anyhow::Result;
use bumpgate_core::{FileReader, Reporter};
use std::cmp::Ordering;
use std::path::Path;

use crate::compare_versions;

/// Verify that the current version is a strict upgrade over the base
/// version and that every additional file already mentions it.
///
/// An unchanged or downgraded version is reported through the failure
/// sink with a single message; additional files are only inspected after
/// a successful upgrade. Each entry is trimmed, resolved against
/// `workspace_dir` and must contain the current version as a substring.
/// Files are checked independently so every stale file gets its own
/// message.
///
/// # Errors
/// Returns error if a version string is malformed or a file cannot be read.
pub async fn check_version_update(
    base_version: &str,
    current_version: &str,
    additional_files: Option<&[String]>,
    workspace_dir: &Path,
    reader: &dyn FileReader,
    reporter: &dyn Reporter,
) -> Result<()> {
    if compare_versions(current_version, base_version)? != Ordering::Greater {
        reporter.fail("You have to update the project version!");
        return Ok(());
    }

    let Some(files) = additional_files else {
        return Ok(());
    };
    for file in files {
        let file = file.trim();
        let content = reader.read_to_string(&workspace_dir.join(file)).await?;
        if !content.contains(current_version) {
            reporter.fail(&format!(
                "You have to update the project version in \"{file}\"!"
            ));
        }
    }
    Ok(())
}
