// src/application/connection_checker.rs
use crate::application::NotesApi;

pub struct ConnectionChecker<A: NotesApi> {
    api: A,
}

impl<A: NotesApi> ConnectionChecker<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn check(&self) -> bool {
        self.api.test_api_connection().await
    }
}
