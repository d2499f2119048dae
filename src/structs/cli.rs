use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "vscan")]
#[clap(about = "Security analysis client for VS Code extensions", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
