//! CHD CLI - Command line access to the housing dataset and chart specs.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "chd-cli",
    version,
    about = "California housing dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: chd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    chd_cmd::run(cli.command)
}
