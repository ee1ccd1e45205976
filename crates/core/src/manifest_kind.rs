use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

/// Recognized manifest formats a project version can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Maven,
    PackageJson,
    VersionTxt,
}

impl ManifestKind {
    /// Recognize a manifest by the trailing segment of a file name or path.
    ///
    /// Matching is case-sensitive and exact: `pom.xml`, `package.json`
    /// or `version.txt`. Anything else is not a supported manifest.
    #[must_use]
    pub fn from_file_name(file_name_or_path: &str) -> Option<Self> {
        let name = Path::new(file_name_or_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file_name_or_path);
        match name {
            "pom.xml" => Some(Self::Maven),
            "package.json" => Some(Self::PackageJson),
            "version.txt" => Some(Self::VersionTxt),
            _ => None,
        }
    }

    /// Returns the canonical file name for this manifest kind
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Maven => "pom.xml",
            Self::PackageJson => "package.json",
            Self::VersionTxt => "version.txt",
        }
    }
}

impl Display for ManifestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Maven => "Maven".red().bold(),
                Self::PackageJson => "package.json".green().bold(),
                Self::VersionTxt => "version.txt".blue().bold(),
            }
        )
    }
}
