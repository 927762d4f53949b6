//! LIST command - List the caller's notes.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use notes_core::Note;
use serde::Serialize;

use super::{HumanReadable, format_timestamp, make_request, output, truncate};

const PREVIEW_LEN: usize = 60;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// Notes as returned by the server, oldest first.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct NoteList(pub Vec<Note>);

impl HumanReadable for NoteList {
    fn print_human(&self) {
        println!("{}", "Your Notes".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.0.is_empty() {
            println!("  {}", "(No notes yet)".dimmed());
            return;
        }

        for note in &self.0 {
            println!(
                "  {} {}",
                format!("#{}", note.id).yellow(),
                note.title.bold()
            );
            let preview = note.content.lines().next().unwrap_or("");
            println!("    {}", truncate(preview, PREVIEW_LEN).dimmed());
            println!(
                "    {} {}",
                "Updated:".cyan(),
                format_timestamp(&note.updated_at)
            );
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.0.len());
    }
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: ListArgs,
) -> Result<()> {
    let url = format!("{}/api/notes", base_url);

    let notes: Vec<Note> = make_request(client.get(&url)).await?;

    output(&NoteList(notes), human)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_list_deserializes_server_shape() {
        let json = r#"[{
            "id": 1,
            "userId": 2,
            "title": "Groceries",
            "content": "milk",
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        }]"#;
        let notes: Vec<Note> = serde_json::from_str(json).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].owner_id.get(), 2);

        let out = serde_json::to_value(NoteList(notes)).unwrap();
        assert!(out.is_array());
        assert_eq!(out[0]["title"], "Groceries");
    }
}
