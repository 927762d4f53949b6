//! LOGIN command - Obtain a session token.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_core::UserProfile;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    pub email: String,

    /// Account password
    #[arg(long, short = 'p', env = "NOTES_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Print only the token, e.g. `export NOTES_TOKEN=$(notes login ... --token-only)`
    #[arg(long)]
    pub token_only: bool,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Response from logging in.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
    pub expires_in_minutes: i64,
}

impl HumanReadable for LoginResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        println!(
            "  {} {} <{}>",
            "User:".cyan(),
            self.user.username.bold(),
            self.user.email
        );
        println!(
            "  {} {} minutes",
            "Expires in:".cyan(),
            self.expires_in_minutes
        );
        println!("  {} {}", "Token:".cyan(), self.token);
        println!();
        println!(
            "  {}",
            "Export it as NOTES_TOKEN to use the note commands.".dimmed()
        );
    }
}

/// Execute the login command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: LoginArgs,
) -> Result<()> {
    let url = format!("{}/api/auth/login", base_url);
    let body = LoginRequest {
        email: &args.email,
        password: &args.password,
    };

    let response: LoginResponse = make_request(client.post(&url).json(&body)).await?;

    if args.token_only {
        println!("{}", response.token);
        return Ok(());
    }

    output(&response, human)
}
