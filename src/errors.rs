/// Branch tool error types
#[derive(Debug, thiserror::Error)]
pub enum BranchToolError {
    /// A git invocation exited unsuccessfully
    #[error("Git command `git {command}` failed: {stderr}")]
    Git { command: String, stderr: String },

    /// HEAD is detached or the repository has no branch checked out
    #[error("Could not determine the current branch (detached HEAD?)")]
    CurrentBranchNotFound,

    /// The numeric stack suffix of a branch could not be incremented
    #[error("Could not increment stack suffix of branch '{branch}'")]
    StackSuffix { branch: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive prompt errors (including a user abort)
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BranchToolError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BranchToolError::Config(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        BranchToolError::Validation(msg.into())
    }

    pub fn prompt<S: Into<String>>(msg: S) -> Self {
        BranchToolError::Prompt(msg.into())
    }

    pub fn git<C: Into<String>, S: Into<String>>(command: C, stderr: S) -> Self {
        BranchToolError::Git {
            command: command.into(),
            stderr: stderr.into(),
        }
    }
}

impl From<dialoguer::Error> for BranchToolError {
    fn from(err: dialoguer::Error) -> Self {
        BranchToolError::Prompt(err.to_string())
    }
}

impl From<config::ConfigError> for BranchToolError {
    fn from(err: config::ConfigError) -> Self {
        BranchToolError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BranchToolError>;
