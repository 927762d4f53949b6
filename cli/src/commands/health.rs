//! HEALTH command - Show server status.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the health command.
#[derive(Args)]
pub struct HealthArgs {
    // No additional arguments needed
}

/// Response from the health endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub users: usize,
    #[serde(default)]
    pub notes: usize,
}

impl HumanReadable for HealthResponse {
    fn print_human(&self) {
        let status = if self.status == "OK" {
            self.status.green().bold()
        } else {
            self.status.red().bold()
        };
        println!("{} {}", status, self.message);
        println!();
        println!("  {} {}", "Server time:".cyan(), format_timestamp(&self.timestamp));
        println!("  {} {}", "Users:".cyan(), self.users);
        println!("  {} {}", "Notes:".cyan(), self.notes);
    }
}

/// Execute the health command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: HealthArgs,
) -> Result<()> {
    let url = format!("{}/api/health", base_url);

    let response: HealthResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
