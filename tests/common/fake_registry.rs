//! Fake process.org.ai registry for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1, serving `GET /things.json`. The response is mutable test
//! state: a serialized dataset, an error status, or a raw (possibly
//! malformed) body. Every request increments a hit counter so harnesses
//! can assert the one-fetch-per-client-lifetime contract.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_registry::FakeRegistry;
//!
//! let registry = FakeRegistry::start().await.unwrap();
//! registry.set_things(vec![]).await;
//!
//! // Point your ProcessClient at registry.base_url()
//! let url = registry.base_url();
//! # });
//! ```

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use pcf_core::Process;

/// What `/things.json` should answer with.
struct Response {
    status: axum::http::StatusCode,
    body: String,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: axum::http::StatusCode::OK,
            body: "[]".to_string(),
        }
    }
}

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    response: Response,
    hits: AtomicUsize,
}

/// Handle to the running fake registry server.
pub struct FakeRegistry {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeRegistry {
    /// Start the fake registry on a random port. Returns once the server is
    /// listening. Until configured, it serves an empty dataset.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/things.json", get(things_json))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL (e.g. `http://127.0.0.1:PORT`) — pass this to the client's
    /// `SourceConfig::base_url`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve the given dataset as a JSON array.
    pub async fn set_things(&self, things: Vec<Process>) {
        let body = serde_json::to_string(&things).expect("dataset serializes");
        let mut state = self.state.lock().await;
        state.response = Response {
            status: axum::http::StatusCode::OK,
            body,
        };
    }

    /// Serve an error status with an empty body.
    pub async fn set_failure(&self, status: u16) {
        let mut state = self.state.lock().await;
        state.response = Response {
            status: axum::http::StatusCode::from_u16(status).expect("valid status"),
            body: String::new(),
        };
    }

    /// Serve a raw body verbatim with 200 OK (for malformed-payload cases).
    pub async fn set_raw_body(&self, body: &str) {
        let mut state = self.state.lock().await;
        state.response = Response {
            status: axum::http::StatusCode::OK,
            body: body.to_string(),
        };
    }

    /// How many times `/things.json` has been requested.
    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits.load(Ordering::SeqCst)
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn things_json(State(state): State<Arc<Mutex<ApiState>>>) -> impl IntoResponse {
    let state = state.lock().await;
    state.hits.fetch_add(1, Ordering::SeqCst);
    (
        state.response.status,
        [("content-type", "application/json")],
        state.response.body.clone(),
    )
}
