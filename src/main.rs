use clap::Parser;
use env_logger::Env;
use review_relay::structs::cli::Cli;
use review_relay::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    CommandRunner::new().run_command(cli.command).await?;
    Ok(())
}
