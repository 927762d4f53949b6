//! REGISTER command - Create an account.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_core::UserProfile;
use serde::{Deserialize, Serialize};

use super::{HumanReadable, make_request, output};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Display name
    pub username: String,

    /// Email address used to log in
    pub email: String,

    /// Account password
    #[arg(long, short = 'p', env = "NOTES_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Response from registering an account.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserProfile,
}

impl HumanReadable for RegisterResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.user.id);
        println!("  {} {}", "Username:".cyan(), self.user.username);
        println!("  {} {}", "Email:".cyan(), self.user.email);
    }
}

/// Execute the register command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RegisterArgs,
) -> Result<()> {
    let url = format!("{}/api/auth/register", base_url);
    let body = RegisterRequest {
        username: &args.username,
        email: &args.email,
        password: &args.password,
    };

    let response: RegisterResponse = make_request(client.post(&url).json(&body)).await?;

    output(&response, human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_deserialize() {
        let json = r#"{
            "message": "User registered successfully",
            "user": {"id": 1, "username": "alice", "email": "alice@example.com"}
        }"#;
        let response: RegisterResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.username, "alice");
        assert_eq!(response.user.id.get(), 1);
    }
}
