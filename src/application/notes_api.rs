// src/application/notes_api.rs
use crate::domain::{ApiError, Note};
use async_trait::async_trait;
use serde_json::Value;

/// Remote notes service as seen by the use cases.
///
/// Every call is an independent round trip; implementations hold no state
/// beyond their configuration.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError>;

    async fn search_notes(&self, query: &str) -> Result<Vec<Note>, ApiError>;

    async fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiError>;

    async fn update_note(&self, id: &str, title: &str, content: &str) -> Result<Note, ApiError>;

    /// Returns the server's acknowledgment body unchanged
    async fn delete_note_by_id(&self, id: &str) -> Result<Value, ApiError>;

    /// Never fails: any error is reported as `false`
    async fn test_api_connection(&self) -> bool;
}
