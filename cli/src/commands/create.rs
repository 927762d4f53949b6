//! CREATE command - Create a note.

use anyhow::Result;
use clap::Args;
use notes_core::Note;
use serde::Serialize;

use super::{make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Note title
    #[arg(long, short = 't')]
    pub title: String,

    /// Note body
    #[arg(long, short = 'c')]
    pub content: String,
}

#[derive(Debug, Serialize)]
struct CreateNoteRequest<'a> {
    title: &'a str,
    content: &'a str,
}

/// Execute the create command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: CreateArgs,
) -> Result<()> {
    let url = format!("{}/api/notes", base_url);
    let body = CreateNoteRequest {
        title: &args.title,
        content: &args.content,
    };

    let note: Note = make_request(client.post(&url).json(&body)).await?;

    output(&note, human)
}
