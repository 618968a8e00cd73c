use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_OUTPUT_PATH;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the configuration form server
    Serve {
        /// Settings file (defaults to ~/backup-config-form/settings.toml)
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        /// Where the generated backup config is written
        #[clap(short, long)]
        output: Option<String>,
        #[clap(long)]
        static_dir: Option<String>,
        /// Open the form in the default browser
        #[clap(long)]
        open: bool,
    },
    /// Write a sample settings file
    Init {
        #[clap(short, long)]
        path: Option<PathBuf>,
    },
    /// Parse a generated backup config and print a summary
    Validate {
        #[clap(default_value = DEFAULT_OUTPUT_PATH)]
        file: PathBuf,
        /// Print the parsed document as JSON instead of a summary
        #[clap(long)]
        json: bool,
    },
}
