//! Platform paths.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "starfolio")
}

/// Default config file location.
///
/// On Linux: `~/.config/starfolio/config.toml`
/// On macOS: `~/Library/Application Support/starfolio/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Where the application writes its log, since the terminal is taken by the UI.
pub fn log_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("starfolio.log"))
}
