pub mod commands;
pub mod output;
pub mod prompt;

use crate::branches::ChangeType;
use crate::config::load_settings;
use crate::errors::{BranchToolError, Result};
use crate::git::{find_repository_root, ShellGit};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::new::NewBranchArgs;
use prompt::DialoguerPrompter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bt")]
#[command(about = "Branch tool - branch naming conventions and cleanup for git")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Settings file applied on top of the user and repository settings
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a new branch, either stacked on the current one or as a new topic
    New {
        /// Stack on the current branch without asking
        #[arg(long, conflicts_with_all = ["change_type", "ticket", "description"])]
        stack: bool,

        /// Type of change for a new topic branch
        #[arg(long = "type", value_enum)]
        change_type: Option<ChangeType>,

        /// Ticket reference for a new topic branch
        #[arg(long)]
        ticket: Option<String>,

        /// Short description for a new topic branch
        #[arg(long)]
        description: Option<String>,

        /// Create the branch without confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// List all local branches, nesting stacks together in a tree
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete branches
    Delete {
        #[command(subcommand)]
        action: DeleteAction,
    },

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum DeleteAction {
    /// Select a branch from the current list, and delete it
    Selected {
        /// Branch to delete instead of choosing from a list
        branch: Option<String>,
    },

    /// Delete branches merged in the current branch
    Merged {
        /// Delete without confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Set a value in the user settings file
    Set {
        /// Configuration key (e.g., git.binary)
        key: String,
        /// Configuration value
        value: String,
    },

    /// Get an effective configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// List all effective configuration values
    List,

    /// Print the path of the user settings file
    Path,
}

impl Cli {
    /// Dispatch the parsed command, returning the process exit code
    pub fn run(self) -> Result<i32> {
        self.setup_logging();

        if self.no_color {
            console::set_colors_enabled(false);
        }
        let color = console::colors_enabled();

        if let Commands::Completions { shell } = self.command {
            return commands::completions::generate_completions(shell);
        }

        let current_dir = std::env::current_dir().map_err(|e| {
            BranchToolError::config(format!("Could not get current directory: {e}"))
        })?;
        let repo_root = find_repository_root(&current_dir);
        let settings = load_settings(repo_root.as_deref(), self.config_file.as_deref())?;

        let git = ShellGit::new(current_dir).with_binary(settings.git.binary.clone());
        let prompter = DialoguerPrompter::new();

        match self.command {
            Commands::New {
                stack,
                change_type,
                ticket,
                description,
                yes,
            } => {
                let args = NewBranchArgs {
                    stack,
                    change_type,
                    ticket,
                    description,
                    yes,
                };
                commands::new::run(&args, &git, &prompter)
            }
            Commands::List { json } => commands::list::run(&git, &settings, json, color),
            Commands::Delete { action } => match action {
                DeleteAction::Selected { branch } => {
                    commands::delete::selected(branch.as_deref(), &git, &prompter)
                }
                DeleteAction::Merged { yes } => {
                    commands::delete::merged(&git, &prompter, &settings, yes)
                }
            },
            Commands::Config { action } => commands::config::run(action, &settings),
            Commands::Completions { shell } => commands::completions::generate_completions(shell),
        }
    }

    fn setup_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_log_level(self.verbose)));

        // A subscriber may already be installed when running inside tests
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .with_ansi(!self.no_color)
            .try_init();
    }
}

/// Log level used when `RUST_LOG` is unset
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}
