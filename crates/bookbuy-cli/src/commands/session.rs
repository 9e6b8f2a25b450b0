use anyhow::{Context, Result};
use bookbuy::controller::ChatController;
use bookbuy::conversation::Conversation;
use bookbuy::providers::http::HttpAgentClient;

use crate::configuration::Settings;
use crate::prompt::cliclack::CliclackPrompt;
use crate::session::Session;

pub fn build_session<'a>(settings: Settings) -> Result<Session<'a, HttpAgentClient>> {
    let client = HttpAgentClient::new(settings.into_api_config())
        .context("Failed to create HTTP client")?;
    let controller = ChatController::with_conversation(client, Conversation::with_greeting());

    Ok(Session::new(controller, Box::new(CliclackPrompt::new())))
}

pub async fn execute(settings: Settings) -> Result<()> {
    let mut session = build_session(settings)?;
    session.start().await
}
