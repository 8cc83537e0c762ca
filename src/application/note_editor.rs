// src/application/note_editor.rs
use crate::application::NotesApi;
use crate::domain::{ApiError, Note};

pub struct NoteEditor<A: NotesApi> {
    api: A,
}

impl<A: NotesApi> NoteEditor<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Create a note; the server assigns the id
    pub async fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiError> {
        self.api.create_note(title, content).await
    }

    pub async fn update_note(&self, id: &str, title: &str, content: &str) -> Result<Note, ApiError> {
        self.api.update_note(id, title, content).await
    }
}
