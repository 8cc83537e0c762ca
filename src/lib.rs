// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod util;

use std::io::Write;
use std::path::Path;
use anyhow::{Context, Result};
use application::{ConnectionChecker, NoteDeleter, NoteEditor, NoteLister, NotesApi};
use domain::Note;
use infrastructure::{Config, NotesApiClient};
use tracing::{debug, info};
use crate::cli::args::{Args, Command};
use crate::constants::SUMMARY_WIDTH;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notes-client with arguments");

    // Initialize infrastructure
    let base_url = resolve_base_url(args.base_url, args.config.as_deref())?;
    let client = NotesApiClient::new(&base_url)
        .with_context(|| format!("Cannot use base URL {base_url}"))?;
    info!(base_url = client.base_url(), "Using notes API");

    let mut stdout = std::io::stdout();
    execute(client, &base_url, args.command, &mut stdout).await
}

/// Pick the base URL: flag/env first, then config file, then the default
pub fn resolve_base_url(flag: Option<String>, config_path: Option<&Path>) -> Result<String> {
    if let Some(url) = flag {
        debug!(%url, "Using base URL from command line");
        return Ok(url);
    }
    let config = Config::resolve(config_path)?;
    Ok(config.api.base_url)
}

/// Run one command against `api`, writing user-facing output to `out`
pub async fn execute<A: NotesApi, W: Write>(
    api: A,
    base_url: &str,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List { json } => {
            let notes = NoteLister::new(api).list_notes(None).await?;
            render_notes(&notes, json, out)?;
        }
        Command::Search { query, json } => {
            info!(%query, "Searching notes");
            let notes = NoteLister::new(api).list_notes(Some(&query)).await?;
            render_notes(&notes, json, out)?;
        }
        Command::Create { title, content } => {
            let note = NoteEditor::new(api).create_note(&title, &content).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&note)?)?;
        }
        Command::Update { id, title, content } => {
            info!(note_id = %id, "Updating note");
            let note = NoteEditor::new(api).update_note(&id, &title, &content).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&note)?)?;
        }
        Command::Delete { id } => {
            info!(note_id = %id, "Deleting note");
            let ack = NoteDeleter::new(api).delete_note(&id).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&ack)?)?;
        }
        Command::Ping => {
            if ConnectionChecker::new(api).check().await {
                writeln!(out, "API reachable at {base_url}")?;
            } else {
                anyhow::bail!("API unreachable at {base_url}");
            }
        }
    }
    Ok(())
}

fn render_notes<W: Write>(notes: &[Note], json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(notes)?)?;
        return Ok(());
    }

    for note in notes {
        writeln!(
            out,
            "{}\t{}\t{}",
            note.id().unwrap_or_default(),
            note.title().unwrap_or_default(),
            util::text::summarize(note.content().unwrap_or_default(), SUMMARY_WIDTH)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{self, note, MockNotesApi};

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_flag_when_resolving_base_url_then_flag_wins() {
        let url = resolve_base_url(Some("http://flag:1".to_string()), None).unwrap();
        assert_eq!(url, "http://flag:1");
    }

    #[tokio::test]
    async fn given_notes_when_listing_as_table_then_prints_one_row_per_note() {
        // Arrange
        let mock = MockNotesApi::builder()
            .with_note(note("1", "Tree", "A rooted graph\nmore"))
            .with_note(note("2", "Graph", "Vertices and edges"))
            .build();
        let mut out = Vec::new();

        // Act
        execute(mock, "http://x", Command::List { json: false }, &mut out)
            .await
            .unwrap();

        // Assert
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "1\tTree\tA rooted graph\n2\tGraph\tVertices and edges\n");
    }

    #[tokio::test]
    async fn given_json_flag_when_searching_then_prints_raw_notes() {
        // Arrange
        let mock = MockNotesApi::builder()
            .with_note(note("1", "Tree", "rooted"))
            .build();
        let mut out = Vec::new();

        // Act
        let command = Command::Search {
            query: "Tree".to_string(),
            json: true,
        };
        execute(mock, "http://x", command, &mut out).await.unwrap();

        // Assert
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{"id": "1", "title": "Tree", "content": "rooted"}])
        );
    }

    #[tokio::test]
    async fn given_unreachable_api_when_pinging_then_returns_error() {
        let mock = MockNotesApi::builder().unreachable().build();
        let mut out = Vec::new();

        let result = execute(mock, "http://x", Command::Ping, &mut out).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unreachable"));
    }

    #[tokio::test]
    async fn given_missing_note_when_deleting_then_surfaces_status() {
        let mock = MockNotesApi::builder().build();
        let mut out = Vec::new();

        let command = Command::Delete { id: "9".to_string() };
        let err = execute(mock, "http://x", command, &mut out).await.unwrap_err();

        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }
}
