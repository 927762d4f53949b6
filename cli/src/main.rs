//! Command-line client for the notes service.
//!
//! Commands:
//! - register: Create an account
//! - login: Obtain a session token
//! - list: List your notes
//! - get: Show one note
//! - create: Create a note
//! - update: Change a note's title and/or content
//! - delete: Delete a note
//! - health: Show server status
//!
//! Configuration via environment:
//! - NOTES_URL: Base URL of the notes server (default: http://localhost:3000)
//! - NOTES_TOKEN: Session token from `notes login`

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, get::GetArgs, health::HealthArgs, list::ListArgs,
    login::LoginArgs, register::RegisterArgs, update::UpdateArgs,
};

/// Notes service CLI
///
/// Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notes server URL
    #[arg(
        long,
        env = "NOTES_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    /// Session token for authenticated commands
    #[arg(long, env = "NOTES_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register(RegisterArgs),

    /// Log in and print a session token
    Login(LoginArgs),

    /// List your notes
    List(ListArgs),

    /// Show a single note
    Get(GetArgs),

    /// Create a note
    Create(CreateArgs),

    /// Update a note's title and/or content
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Show server health
    Health(HealthArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Register(args) => {
            commands::register::execute(&client, url, cli.human, args).await
        }
        Commands::Login(args) => commands::login::execute(&client, url, cli.human, args).await,
        Commands::List(args) => commands::list::execute(&client, url, cli.human, args).await,
        Commands::Get(args) => commands::get::execute(&client, url, cli.human, args).await,
        Commands::Create(args) => commands::create::execute(&client, url, cli.human, args).await,
        Commands::Update(args) => commands::update::execute(&client, url, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, url, cli.human, args).await,
        Commands::Health(args) => commands::health::execute(&client, url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
