use branch_tool::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let exit_code = cli.run().map_err(anyhow::Error::new)?;
    std::process::exit(exit_code);
}
