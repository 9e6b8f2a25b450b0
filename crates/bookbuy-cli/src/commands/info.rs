use anyhow::{Context, Result};
use bat::WrappingMode;
use bookbuy::providers::http::HttpAgentClient;
use cliclack::spinner;
use serde_json::Value;

use crate::configuration::Settings;

#[derive(Debug, Clone, Copy)]
pub enum InfoKind {
    Agent,
    Team,
}

pub async fn execute(settings: Settings, kind: InfoKind) -> Result<()> {
    let client = HttpAgentClient::new(settings.into_api_config())
        .context("Failed to create HTTP client")?;

    let spin = spinner();
    spin.start("Fetching from the agent server...");
    let result = match kind {
        InfoKind::Agent => client.agent_info().await,
        InfoKind::Team => client.team_info().await,
    };
    spin.stop("");

    let info = result.with_context(|| {
        format!("Could not fetch info from {}", client.config().base_url)
    })?;
    print_json(&info)
}

fn print_json(value: &Value) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    bat::PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("JSON")
        .wrapping_mode(WrappingMode::Character)
        .print()
        .map_err(|e| anyhow::anyhow!("Failed to print: {}", e))?;
    Ok(())
}
