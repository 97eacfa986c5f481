//! Platform-specific file locations.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "picklist";
const APPLICATION: &str = "picklist-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Settings file read at startup when no path is given on the command line.
///
/// - Linux: `$XDG_CONFIG_HOME/picklist-demo/choices.json`
/// - macOS: `~/Library/Application Support/dev.picklist.picklist-demo/choices.json`
pub fn settings_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("choices.json"))
}

/// Log file, overwritten on every run.
///
/// - Linux: `$XDG_CACHE_HOME/picklist-demo/latest.log`
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}
