use anyhow::Result;
use bumpgate_core::{ConsoleReporter, FileReader, FsFileReader, ManifestKind, Reporter};
use bumpgate_manifest::project_version;
use bumpgate_utils::check_version_update;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for a run that recorded at least one failure
#[derive(Debug, Error)]
#[error("version check failed")]
pub struct CheckFailed;

#[derive(Args, Debug)]
#[command(about = "Check that the project version was bumped")]
pub struct CheckArgs {
    /// Manifest file holding the current project version
    #[arg(short, long)]
    pub file: PathBuf,

    /// Base version to compare against
    #[arg(
        short,
        long,
        conflicts_with = "base_file",
        required_unless_present = "base_file"
    )]
    pub base_version: Option<String>,

    /// Manifest file to read the base version from instead of a literal
    #[arg(long)]
    pub base_file: Option<PathBuf>,

    /// Maven property holding the version instead of the project version
    #[arg(short, long)]
    pub property: Option<String>,

    /// Additional files that must mention the new version (comma separated)
    #[arg(short = 'c', long = "check", value_delimiter = ',')]
    pub check_files: Vec<String>,

    /// Directory additional files are resolved against, defaults to
    /// $GITHUB_WORKSPACE and then the current directory
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,
}

/// Run the version check with the real file reader and console reporter.
///
/// # Errors
/// Returns `CheckFailed` if any failure was reported, or the underlying
/// error if a required file could not be read or parsed.
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    let reporter = ConsoleReporter::new();
    run_check(args, &FsFileReader, &reporter).await?;
    if reporter.is_failed() {
        return Err(CheckFailed.into());
    }
    println!("{}", "Version check passed".green().bold());
    Ok(())
}

async fn run_check(
    args: &CheckArgs,
    reader: &dyn FileReader,
    reporter: &dyn Reporter,
) -> Result<()> {
    let property = args.property.as_deref();
    if let Some(kind) = ManifestKind::from_file_name(&args.file.to_string_lossy()) {
        println!("Detected {} manifest - {}", kind, args.file.display());
    }

    let Some(current_version) = extract_version(&args.file, property, reader, reporter).await?
    else {
        return Ok(());
    };
    let base_version = match (&args.base_version, &args.base_file) {
        (Some(version), _) => Some(version.clone()),
        (None, Some(path)) => extract_version(path, property, reader, reporter).await?,
        (None, None) => anyhow::bail!("Either a base version or a base file is required"),
    };
    let Some(base_version) = base_version else {
        return Ok(());
    };

    println!("Current version: {}", current_version.green().bold());
    println!("Base version: {}", base_version.cyan().bold());

    let check_files = (!args.check_files.is_empty()).then_some(args.check_files.as_slice());
    check_version_update(
        &base_version,
        &current_version,
        check_files,
        &workspace_dir(args)?,
        reader,
        reporter,
    )
    .await
}

async fn extract_version(
    path: &Path,
    property: Option<&str>,
    reader: &dyn FileReader,
    reporter: &dyn Reporter,
) -> Result<Option<String>> {
    let content = reader.read_to_string(path).await?;
    project_version(&content, &path.to_string_lossy(), property, reporter)
}

fn workspace_dir(args: &CheckArgs) -> Result<PathBuf> {
    if let Some(workspace) = &args.workspace {
        return Ok(workspace.clone());
    }
    if let Ok(workspace) = std::env::var("GITHUB_WORKSPACE")
        && !workspace.is_empty()
    {
        return Ok(PathBuf::from(workspace));
    }
    Ok(std::env::current_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(file: PathBuf, base_version: &str) -> CheckArgs {
        CheckArgs {
            file,
            base_version: Some(base_version.to_string()),
            base_file: None,
            property: None,
            check_files: Vec::new(),
            workspace: None,
        }
    }

    #[tokio::test]
    async fn test_run_check_passes_on_bumped_version() {
        let temp_dir = TempDir::new().unwrap();
        let pom = temp_dir.path().join("pom.xml");
        fs::write(&pom, "<project><version>1.1.0</version></project>").unwrap();

        let reporter = ConsoleReporter::new();
        run_check(&args(pom, "1.0.0"), &FsFileReader, &reporter)
            .await
            .unwrap();

        assert!(!reporter.is_failed());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_run_check_fails_on_unchanged_version() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("package.json");
        fs::write(&manifest, r#"{"version":"1.0.0"}"#).unwrap();

        let reporter = ConsoleReporter::new();
        run_check(&args(manifest, "1.0.0"), &FsFileReader, &reporter)
            .await
            .unwrap();

        assert_eq!(
            reporter.failures(),
            vec!["You have to update the project version!".to_string()]
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_run_check_reports_unsupported_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let jar = temp_dir.path().join("version.jar");
        fs::write(&jar, "1.0.0").unwrap();

        let reporter = ConsoleReporter::new();
        run_check(&args(jar.clone(), "0.9.0"), &FsFileReader, &reporter)
            .await
            .unwrap();

        assert_eq!(
            reporter.failures(),
            vec![format!("\"{}\" is not supported!", jar.display())]
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_run_check_with_base_file() {
        let temp_dir = TempDir::new().unwrap();
        let current = temp_dir.path().join("version.txt");
        let base = temp_dir.path().join("base").join("version.txt");
        fs::create_dir_all(base.parent().unwrap()).unwrap();
        fs::write(&current, "1.1.0\n").unwrap();
        fs::write(&base, "1.0.0\n").unwrap();

        let mut check_args = args(current, "unused");
        check_args.base_version = None;
        check_args.base_file = Some(base);

        let reporter = ConsoleReporter::new();
        run_check(&check_args, &FsFileReader, &reporter)
            .await
            .unwrap();

        assert!(!reporter.is_failed());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_run_check_with_maven_property() {
        let temp_dir = TempDir::new().unwrap();
        let pom = temp_dir.path().join("pom.xml");
        fs::write(
            &pom,
            r#"<project>
  <version>0.0.1</version>
  <properties>
    <test.project.version>1.2.3</test.project.version>
  </properties>
</project>"#,
        )
        .unwrap();

        let mut check_args = args(pom, "1.2.2");
        check_args.property = Some("test.project.version".to_string());

        let reporter = ConsoleReporter::new();
        run_check(&check_args, &FsFileReader, &reporter)
            .await
            .unwrap();

        assert!(!reporter.is_failed());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_run_check_additional_files_in_workspace() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("package.json");
        fs::write(&manifest, r#"{"version":"1.1.0"}"#).unwrap();
        fs::write(temp_dir.path().join("README.md"), "still at 1.0.0").unwrap();

        let mut check_args = args(manifest, "1.0.0");
        check_args.check_files = vec!["README.md".to_string()];
        check_args.workspace = Some(temp_dir.path().to_path_buf());

        let reporter = ConsoleReporter::new();
        run_check(&check_args, &FsFileReader, &reporter)
            .await
            .unwrap();

        assert_eq!(
            reporter.failures(),
            vec![r#"You have to update the project version in "README.md"!"#.to_string()]
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_run_check_missing_manifest_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("pom.xml");

        let reporter = ConsoleReporter::new();
        let result = run_check(&args(missing, "1.0.0"), &FsFileReader, &reporter).await;

        assert!(result.is_err());
        assert!(!reporter.is_failed());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_handle_check_maps_failures_to_check_failed() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("package.json");
        fs::write(&manifest, r#"{"version":"1.0.0"}"#).unwrap();

        let result = handle_check(&args(manifest, "1.0.0")).await;

        let error = result.unwrap_err();
        assert!(error.downcast_ref::<CheckFailed>().is_some());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_handle_check_passes() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("version.txt");
        fs::write(&manifest, "2.0.0").unwrap();

        let result = handle_check(&args(manifest, "1.9.9")).await;

        assert!(result.is_ok());

        temp_dir.close().unwrap();
    }

    #[test]
    fn test_workspace_dir_prefers_explicit_flag() {
        let mut check_args = args(PathBuf::from("pom.xml"), "1.0.0");
        check_args.workspace = Some(PathBuf::from("some/workspace"));

        let dir = workspace_dir(&check_args).unwrap();
        assert_eq!(dir, PathBuf::from("some/workspace"));
    }
}
