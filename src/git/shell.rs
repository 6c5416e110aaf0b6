use crate::errors::{BranchToolError, Result};
use crate::git::client::GitClient;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// `GitClient` that spawns the git executable and waits for it
#[derive(Debug, Clone)]
pub struct ShellGit {
    binary: String,
    workdir: PathBuf,
}

impl ShellGit {
    pub fn new<P: Into<PathBuf>>(workdir: P) -> Self {
        Self {
            binary: "git".to_string(),
            workdir: workdir.into(),
        }
    }

    /// Use a different git executable
    pub fn with_binary<S: Into<String>>(mut self, binary: S) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Top level of the working tree containing `workdir`
    pub fn repository_root(&self) -> Result<PathBuf> {
        let stdout = self.run(&["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(stdout.trim()))
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        debug!("Running {} {}", self.binary, command);

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| BranchToolError::git(&command, format!("could not spawn: {e}")))?;

        debug!("git {} exited with {}", command, output.status);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(BranchToolError::git(command, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn branch_names(&self, args: &[&str]) -> Result<Vec<String>> {
        let stdout = self.run(args)?;
        Ok(parse_branch_names(&stdout))
    }
}

/// One branch per line; blank lines and detached-HEAD markers are skipped
fn parse_branch_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('('))
        .map(str::to_string)
        .collect()
}

impl GitClient for ShellGit {
    fn current_branch(&self) -> Result<String> {
        let stdout = self.run(&["branch", "--show-current"])?;
        let current = stdout.trim();
        if current.is_empty() {
            return Err(BranchToolError::CurrentBranchNotFound);
        }
        Ok(current.to_string())
    }

    fn local_branches(&self) -> Result<Vec<String>> {
        self.branch_names(&["branch", "--format=%(refname:short)"])
    }

    fn merged_branches(&self) -> Result<Vec<String>> {
        // `--merged` takes an optional commit, so it goes last with HEAD spelled out
        self.branch_names(&["branch", "--format=%(refname:short)", "--merged", "HEAD"])
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.run(&["checkout", "-b", name])?;
        info!("Created branch '{}'", name);
        Ok(())
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };
        self.run(&["branch", flag, name])?;
        info!("Deleted branch '{}'", name);
        Ok(())
    }
}

/// Ask git for the working tree containing `start_path`, `None` outside a repository
pub fn find_repository_root(start_path: &Path) -> Option<PathBuf> {
    match ShellGit::new(start_path).repository_root() {
        Ok(root) => Some(root),
        Err(e) => {
            debug!("No repository at {}: {}", start_path.display(), e);
            None
        }
    }
}
