use clap::Parser;
use pressboard::cli::{Cli, Command};
use pressboard::{config, Pressboard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Some(Command::ConfigTemplate) => {
            config::print_config_template();
            return Ok(());
        }
        Some(Command::ConfigInit { config_path }) => {
            config::init_config(config_path)?;
            return Ok(());
        }
        None => {}
    }

    let config = config::Config::load(cli.args.config_path)?;

    Pressboard::boot(config).await?.serve().await
}
