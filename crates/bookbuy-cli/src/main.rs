use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

mod commands;
mod configuration;
mod error;
mod prompt;
mod session;

use commands::info::InfoKind;
use commands::run::RunArgs;
use configuration::Settings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the agent server (can also be set via API_BASE_URL environment variable)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat with the agent (default)
    Session,

    /// Submit a single request and print the reply
    Run(RunArgs),

    /// Print the default request template
    Template,

    /// Show what the agent server says about itself
    AgentInfo,

    /// Show the team that runs the agent server
    TeamInfo,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Session);

    if let Command::Template = command {
        commands::template::execute();
        return Ok(());
    }

    let settings = Settings::new(cli.api_url).context("Failed to load configuration")?;
    match command {
        Command::Session => commands::session::execute(settings).await,
        Command::Run(args) => commands::run::execute(settings, args).await,
        Command::AgentInfo => commands::info::execute(settings, InfoKind::Agent).await,
        Command::TeamInfo => commands::info::execute(settings, InfoKind::Team).await,
        Command::Template => Ok(()),
    }
}
