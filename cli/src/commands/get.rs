//! GET command - Show a single note.

use anyhow::Result;
use clap::Args;
use notes_core::{Note, NoteId};

use super::{make_request, output};

/// Arguments for the get command.
#[derive(Args)]
pub struct GetArgs {
    /// Note ID
    pub id: NoteId,
}

/// Execute the get command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: GetArgs,
) -> Result<()> {
    let url = format!("{}/api/notes/{}", base_url, args.id);

    let note: Note = make_request(client.get(&url)).await?;

    output(&note, human)
}
