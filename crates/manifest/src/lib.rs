pub mod extract;
pub mod maven;
pub mod package_json;

pub use extract::project_version;
pub use maven::version_from_maven;
pub use package_json::version_from_package_json;
