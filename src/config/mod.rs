pub mod settings;

pub use settings::{DeleteSettings, GitSettings, ListSettings, Settings, ENV_PREFIX};

use crate::errors::{BranchToolError, Result};
use std::path::{Path, PathBuf};

/// Settings file kept at the root of a repository
pub const REPO_CONFIG_FILE: &str = ".branch-tool.json";

/// Get the user configuration file (`<config dir>/branch-tool/config.json`)
pub fn user_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| BranchToolError::config("Could not find the user configuration directory"))?;
    Ok(config_dir.join("branch-tool").join("config.json"))
}

/// Get the settings file for a specific repository
pub fn repo_config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(REPO_CONFIG_FILE)
}

/// Settings files that apply, lowest precedence first.
///
/// The user and repository files are optional and only listed when present;
/// an explicit file is always listed so a typo in `--config` is reported.
pub fn settings_files(repo_root: Option<&Path>, explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(user) = user_config_path() {
        if user.exists() {
            files.push(user);
        }
    }

    if let Some(root) = repo_root {
        let repo = repo_config_path(root);
        if repo.exists() {
            files.push(repo);
        }
    }

    if let Some(path) = explicit {
        files.push(path.to_path_buf());
    }

    files
}

/// Resolve and load the effective settings
pub fn load_settings(repo_root: Option<&Path>, explicit: Option<&Path>) -> Result<Settings> {
    Settings::load(&settings_files(repo_root, explicit))
}
