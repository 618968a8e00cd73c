use backup_config_form::structs::cli::Cli;
use backup_config_form::workers::command_runner::CommandRunner;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = CommandRunner::new().run_command(cli.command).await {
        log::error!("{}", e.user_message());
        return Err(anyhow::Error::new(e));
    }
    Ok(())
}
