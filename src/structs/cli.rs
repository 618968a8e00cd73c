use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "backup-config-form")]
#[clap(about = "Web form that generates a repository backup config", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
