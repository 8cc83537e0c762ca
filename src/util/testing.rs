// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NotesApi;
use crate::domain::{ApiError, Note};

/// Build a note with the three standard fields
pub fn note(id: &str, title: &str, content: &str) -> Note {
    let mut fields = Map::new();
    fields.insert("id".to_string(), json!(id));
    fields.insert("title".to_string(), json!(title));
    fields.insert("content".to_string(), json!(content));
    Note::from(fields)
}

/// Shared in-memory stand-in for the remote notes service
///
/// Behaves like the real server for the happy path (search matches title or
/// content, unknown ids answer 404) and can be switched to simulate a
/// transport failure.
///
/// # Examples
///
/// ```
/// use notes_client::util::testing::{note, MockNotesApi};
///
/// let mock = MockNotesApi::builder()
///     .with_note(note("1", "Question", "Answer"))
///     .build();
/// ```
pub struct MockNotesApi {
    notes: Vec<Note>,
    search_results: HashMap<String, Vec<Note>>,
    unreachable: bool,
}

impl MockNotesApi {
    pub fn builder() -> MockNotesApiBuilder {
        MockNotesApiBuilder::new()
    }

    fn reachable(&self) -> Result<(), ApiError> {
        if self.unreachable {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.notes.iter().any(|n| n.id().as_deref() == Some(id))
    }
}

#[async_trait]
impl NotesApi for MockNotesApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.reachable()?;
        Ok(self.notes.clone())
    }

    async fn search_notes(&self, query: &str) -> Result<Vec<Note>, ApiError> {
        self.reachable()?;
        if let Some(results) = self.search_results.get(query) {
            return Ok(results.clone());
        }

        // Default behavior: substring match on title or content
        Ok(self
            .notes
            .iter()
            .filter(|n| {
                n.title().is_some_and(|t| t.contains(query))
                    || n.content().is_some_and(|c| c.contains(query))
            })
            .cloned()
            .collect())
    }

    async fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiError> {
        self.reachable()?;
        let id = (self.notes.len() + 1).to_string();
        Ok(note(&id, title, content))
    }

    async fn update_note(&self, id: &str, title: &str, content: &str) -> Result<Note, ApiError> {
        self.reachable()?;
        if !self.contains(id) {
            return Err(ApiError::Request { status: 404 });
        }
        Ok(note(id, title, content))
    }

    async fn delete_note_by_id(&self, id: &str) -> Result<Value, ApiError> {
        self.reachable()?;
        if !self.contains(id) {
            return Err(ApiError::Request { status: 404 });
        }
        Ok(json!({"status": "ok"}))
    }

    async fn test_api_connection(&self) -> bool {
        !self.unreachable
    }
}

/// Builder for MockNotesApi
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNotesApiBuilder {
    notes: Vec<Note>,
    search_results: HashMap<String, Vec<Note>>,
    unreachable: bool,
}

impl MockNotesApiBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            search_results: HashMap::new(),
            unreachable: false,
        }
    }

    /// Add a note that is listed, searchable, updatable and deletable
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Configure the result of search_notes for a specific query
    pub fn with_search_result(mut self, query: &str, results: Vec<Note>) -> Self {
        self.search_results.insert(query.to_string(), results);
        self
    }

    /// Make every call fail as if the server were down
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn build(self) -> MockNotesApi {
        MockNotesApi {
            notes: self.notes,
            search_results: self.search_results,
            unreachable: self.unreachable,
        }
    }
}

impl Default for MockNotesApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
