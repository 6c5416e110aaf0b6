use crate::cli::Cli;
use crate::errors::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

pub const BIN_NAME: &str = "bt";

/// Write the completion script for `shell` to `out`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Print shell completions for the specified shell
pub fn generate_completions(shell: Shell) -> Result<i32> {
    write_completions(shell, &mut io::stdout());
    Ok(0)
}
