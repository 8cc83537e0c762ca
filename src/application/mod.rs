// src/application/mod.rs
pub mod connection_checker;
pub mod note_deleter;
pub mod note_editor;
pub mod note_lister;
pub mod notes_api;

pub use connection_checker::ConnectionChecker;
pub use note_deleter::NoteDeleter;
pub use note_editor::NoteEditor;
pub use note_lister::NoteLister;
pub use notes_api::NotesApi;
