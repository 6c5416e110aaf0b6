use crate::errors::{BranchToolError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of environment overrides, e.g. `BRANCH_TOOL__GIT__BINARY`
pub const ENV_PREFIX: &str = "BRANCH_TOOL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub git: GitSettings,
    pub delete: DeleteSettings,
    pub list: ListSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitSettings {
    /// Executable spawned for every git operation
    pub binary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteSettings {
    /// Long-lived branches never offered for bulk deletion
    pub protected_branches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    pub show_current_header: bool,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            binary: "git".to_string(),
        }
    }
}

impl Default for DeleteSettings {
    fn default() -> Self {
        Self {
            protected_branches: vec![
                "main".to_string(),
                "master".to_string(),
                "develop".to_string(),
            ],
        }
    }
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            show_current_header: true,
        }
    }
}

impl Settings {
    /// Every key understood by `get_value` and `set_value`
    pub const KEYS: [&'static str; 3] = [
        "git.binary",
        "delete.protected_branches",
        "list.show_current_header",
    ];

    /// Layer defaults, the given JSON files (later wins) and the environment
    pub fn load(files: &[PathBuf]) -> Result<Self> {
        let defaults = serde_json::to_string(&Settings::default())?;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(&defaults, config::FileFormat::Json));

        for file in files {
            tracing::debug!("Loading settings from {}", file.display());
            builder = builder.add_source(
                config::File::from(file.as_path())
                    .format(config::FileFormat::Json)
                    .required(true),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("delete.protected_branches")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load a single settings file, falling back to defaults when it does not exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| BranchToolError::config(format!("Failed to read config file: {e}")))?;

        serde_json::from_str(&content)
            .map_err(|e| BranchToolError::config(format!("Failed to parse config file: {e}")))
    }

    /// Save settings as pretty JSON, creating the parent directory
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BranchToolError::config(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| BranchToolError::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Update a configuration value by `section.key`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match split_key(key)? {
            ("git", "binary") => self.git.binary = value.to_string(),
            ("delete", "protected_branches") => {
                self.delete.protected_branches = value
                    .split(',')
                    .map(str::trim)
                    .filter(|branch| !branch.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            ("list", "show_current_header") => {
                self.list.show_current_header = value.parse().map_err(|_| {
                    BranchToolError::config(format!("Invalid boolean value: {value}"))
                })?;
            }
            _ => return Err(BranchToolError::config(format!("Unknown config key: {key}"))),
        }

        Ok(())
    }

    /// Get a configuration value by `section.key`
    pub fn get_value(&self, key: &str) -> Result<String> {
        let value = match split_key(key)? {
            ("git", "binary") => self.git.binary.clone(),
            ("delete", "protected_branches") => self.delete.protected_branches.join(","),
            ("list", "show_current_header") => self.list.show_current_header.to_string(),
            _ => return Err(BranchToolError::config(format!("Unknown config key: {key}"))),
        };

        Ok(value)
    }

    pub fn validate(&self) -> Result<()> {
        if self.git.binary.trim().is_empty() {
            return Err(BranchToolError::config("git.binary must not be empty"));
        }
        Ok(())
    }

    pub fn is_protected(&self, branch: &str) -> bool {
        self.delete.protected_branches.iter().any(|b| b == branch)
    }
}

fn split_key(key: &str) -> Result<(&str, &str)> {
    key.split_once('.')
        .filter(|(_, rest)| !rest.contains('.'))
        .ok_or_else(|| BranchToolError::config(format!("Invalid config key format: {key}")))
}
