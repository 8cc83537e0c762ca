use notes_client::infrastructure::NotesApiClient;
use std::net::TcpListener;
use wiremock::MockServer;

/// Test fixture pairing a wiremock server with a client pointed at it
pub struct TestServer {
    pub server: MockServer,
    pub client: NotesApiClient,
}

impl TestServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let client = NotesApiClient::new(&server.uri()).expect("mock server URI is valid");
        Self { server, client }
    }

    /// Raw query string of the single request the server received
    #[allow(dead_code)]
    pub async fn last_query(&self) -> Option<String> {
        let requests = self.server.received_requests().await?;
        requests.last()?.url.query().map(str::to_string)
    }
}

/// Client whose base URL points at a port nothing listens on
#[allow(dead_code)]
pub fn unreachable_client() -> NotesApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    NotesApiClient::new(&format!("http://127.0.0.1:{port}")).expect("valid URL")
}

/// Canned notes used across tests
#[allow(dead_code)]
pub mod sample {
    use serde_json::{json, Value};

    pub fn notes() -> Value {
        json!([
            {"id": "1", "title": "Tree", "content": "A rooted acyclic graph"},
            {"id": "2", "title": "Graph", "content": "Vertices and edges"}
        ])
    }

    pub fn created() -> Value {
        json!({"id": "1", "title": "Title", "content": "Body"})
    }
}
