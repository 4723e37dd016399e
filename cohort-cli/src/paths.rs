//! Platform-specific directory paths.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "cohort";
const APPLICATION: &str = "cohort";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the path to the log file, creating its directory.
///
/// Falls back to the working directory when no cache dir is available.
pub fn log_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .and_then(|dir| fs::create_dir_all(&dir).ok().map(|_| dir))
        .unwrap_or_default()
        .join("cohort-cli.log")
}
