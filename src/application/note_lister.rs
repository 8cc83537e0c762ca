// src/application/note_lister.rs
use crate::application::NotesApi;
use crate::domain::{ApiError, Note};

pub struct NoteLister<A: NotesApi> {
    api: A,
}

impl<A: NotesApi> NoteLister<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List all notes, or search when a query is given
    ///
    /// # Arguments
    /// * `search_query` - Optional search term; `None` lists everything
    ///
    /// # Returns
    /// The notes exactly as the server returned them
    pub async fn list_notes(&self, search_query: Option<&str>) -> Result<Vec<Note>, ApiError> {
        match search_query {
            None => self.api.list_notes().await,
            Some(query) => self.api.search_notes(query).await,
        }
    }
}
