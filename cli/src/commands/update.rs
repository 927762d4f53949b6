//! UPDATE command - Change a note's title and/or content.

use anyhow::Result;
use clap::Args;
use notes_core::{Note, NoteId, NotePatch};

use super::{make_request, output};

/// Arguments for the update command.
///
/// Fields left out keep their current value.
#[derive(Args)]
pub struct UpdateArgs {
    /// Note ID
    pub id: NoteId,

    /// New title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New body
    #[arg(long, short = 'c')]
    pub content: Option<String>,
}

impl UpdateArgs {
    fn patch(self) -> NotePatch {
        NotePatch {
            title: self.title,
            content: self.content,
        }
    }
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: UpdateArgs,
) -> Result<()> {
    let url = format!("{}/api/notes/{}", base_url, args.id);
    let patch = args.patch();

    let note: Note = make_request(client.put(&url).json(&patch)).await?;

    output(&note, human)
}
