// src/application/note_deleter.rs
use crate::application::NotesApi;
use crate::domain::ApiError;
use serde_json::Value;

pub struct NoteDeleter<A: NotesApi> {
    api: A,
}

impl<A: NotesApi> NoteDeleter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Delete a note and return the server's acknowledgment
    pub async fn delete_note(&self, note_id: &str) -> Result<Value, ApiError> {
        self.api.delete_note_by_id(note_id).await
    }
}
