//! Synthetic cartoonize server for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use parking_lot::Mutex;

/// Smallest valid PNG: 1×1 transparent pixel
pub const FIXED_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Uploads starting with this marker are answered late
pub const SLOW_MARKER: &[u8] = b"slow";

/// How the synthetic server answers `POST /image/cartoon`
#[derive(Clone, Debug)]
pub enum Behavior {
    /// Always the same body
    Fixed(Vec<u8>),
    /// `cartoon:` followed by the uploaded bytes; slow uploads wait first
    Echo,
    /// Empty body with this status
    Status(u16),
}

/// One multipart field as the server saw it
#[derive(Clone, Debug)]
pub struct ReceivedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct ServerState {
    behavior: Behavior,
    requests: Arc<Mutex<Vec<Vec<ReceivedField>>>>,
}

pub struct TestServer {
    pub url: String,
    requests: Arc<Mutex<Vec<Vec<ReceivedField>>>>,
}

impl TestServer {
    /// Fields of every request received so far
    pub fn requests(&self) -> Vec<Vec<ReceivedField>> {
        self.requests.lock().clone()
    }
}

pub async fn spawn_server(behavior: Behavior) -> TestServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        behavior,
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/image/cartoon", post(cartoon))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        url: format!("http://{}", addr),
        requests,
    }
}

async fn cartoon(State(state): State<ServerState>, mut multipart: Multipart) -> (StatusCode, Vec<u8>) {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        fields.push(ReceivedField {
            name,
            file_name,
            content_type,
            bytes,
        });
    }
    let image = fields
        .iter()
        .find(|f| f.name == "image")
        .map(|f| f.bytes.clone())
        .unwrap_or_default();
    state.requests.lock().push(fields);

    match &state.behavior {
        Behavior::Fixed(body) => (StatusCode::OK, body.clone()),
        Behavior::Echo => {
            if image.starts_with(SLOW_MARKER) {
                tokio::time::sleep(Duration::from_millis(300)).await;
            }
            let mut body = b"cartoon:".to_vec();
            body.extend_from_slice(&image);
            (StatusCode::OK, body)
        }
        Behavior::Status(code) => (
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Vec::new(),
        ),
    }
}
