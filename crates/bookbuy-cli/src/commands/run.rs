use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bookbuy::controller::ChatController;
use bookbuy::providers::http::HttpAgentClient;
use clap::Args;

use crate::configuration::Settings;
use crate::prompt::cliclack::CliclackPrompt;
use crate::session::Session;

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct RunArgs {
    /// Path to a file holding the request JSON
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// The request JSON itself
    #[arg(short, long)]
    pub request: Option<String>,
}

fn read_buffer(args: RunArgs) -> Result<String> {
    match (args.file, args.request) {
        (Some(path), _) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request from {}", path.display())),
        (None, Some(request)) => Ok(request),
        (None, None) => anyhow::bail!("Either --file or --request is required"),
    }
}

pub async fn execute(settings: Settings, args: RunArgs) -> Result<()> {
    let buffer = read_buffer(args)?;

    let client = HttpAgentClient::new(settings.into_api_config())
        .context("Failed to create HTTP client")?;
    let mut session = Session::new(ChatController::new(client), Box::new(CliclackPrompt::new()));
    session.headless_start(&buffer).await
}
