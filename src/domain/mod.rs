// src/domain/mod.rs
pub mod error;
pub mod note;

pub use error::ApiError;
pub use note::Note;
