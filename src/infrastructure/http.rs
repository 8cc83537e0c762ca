// src/infrastructure/http.rs
//! HTTP implementation of [`NotesApi`] over reqwest.
//!
//! Resources: `GET /notes`, `GET /search?q=`, and `POST`/`PUT`/`DELETE /notes`
//! with JSON bodies. A non-2xx status becomes [`ApiError::Request`] without
//! reading the body; a call that never produced a response becomes
//! [`ApiError::Network`]. Failures are logged before they are returned.

use crate::application::NotesApi;
use crate::constants::DEFAULT_BASE_URL;
use crate::domain::{ApiError, Note};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, instrument};

#[derive(Debug, Serialize)]
struct NewNote<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct NoteUpdate<'a> {
    id: &'a str,
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct NoteRef<'a> {
    id: &'a str,
}

#[derive(Debug, Clone)]
pub struct NotesApiClient {
    base_url: String,
    client: Client,
}

impl NotesApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured reqwest client, e.g. one with a timeout
    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ApiError> {
        let trimmed = base_url.strip_suffix('/').unwrap_or(base_url);
        let parsed = Url::parse(trimmed)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }
        // Resource paths are appended verbatim
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url}: must not contain a query or fragment"
            )));
        }

        debug!(base_url = trimmed, "Creating NotesApiClient");
        Ok(Self {
            base_url: trimmed.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(query))
    }

    /// Send, check the status, and decode the JSON body
    async fn send_json<T: DeserializeOwned>(
        &self,
        action: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let result: Result<T, ApiError> = async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            debug!(status = status.as_u16(), "Received response");
            if !status.is_success() {
                return Err(ApiError::Request {
                    status: status.as_u16(),
                });
            }

            response.json::<T>().await.map_err(|e| {
                if e.is_decode() {
                    ApiError::Decode(e.to_string())
                } else {
                    ApiError::Network(e.to_string())
                }
            })
        }
        .await;

        result.inspect_err(|e| error!(error = %e, "Error {action}"))
    }
}

impl Default for NotesApiClient {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl NotesApi for NotesApiClient {
    #[instrument(level = "debug", skip(self), fields(base_url = %self.base_url))]
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let request = self.client.get(self.url("/notes"));
        self.send_json("fetching notes", request).await
    }

    #[instrument(level = "debug", skip(self), fields(base_url = %self.base_url))]
    async fn search_notes(&self, query: &str) -> Result<Vec<Note>, ApiError> {
        let request = self.client.get(self.search_url(query));
        self.send_json("searching notes", request).await
    }

    #[instrument(level = "debug", skip(self, content), fields(base_url = %self.base_url))]
    async fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiError> {
        let request = self
            .client
            .post(self.url("/notes"))
            .json(&NewNote { title, content });
        self.send_json("creating note", request).await
    }

    #[instrument(level = "debug", skip(self, content), fields(base_url = %self.base_url))]
    async fn update_note(&self, id: &str, title: &str, content: &str) -> Result<Note, ApiError> {
        let request = self
            .client
            .put(self.url("/notes"))
            .json(&NoteUpdate { id, title, content });
        self.send_json("updating note", request).await
    }

    #[instrument(level = "debug", skip(self), fields(base_url = %self.base_url))]
    async fn delete_note_by_id(&self, id: &str) -> Result<Value, ApiError> {
        let request = self
            .client
            .delete(self.url("/notes"))
            .json(&NoteRef { id });
        self.send_json("deleting note", request).await
    }

    #[instrument(level = "debug", skip(self), fields(base_url = %self.base_url))]
    async fn test_api_connection(&self) -> bool {
        match self.client.get(self.url("/notes")).send().await {
            Ok(response) => {
                debug!(status = response.status().as_u16(), "Connection test response");
                response.status().is_success()
            }
            Err(e) => {
                error!(error = %e, "API connection test failed");
                false
            }
        }
    }
}
