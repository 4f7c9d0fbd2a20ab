use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// A request received by the stub plugin.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

pub struct StubResponses {
    pub probe_status: StatusCode,
    pub entry_status: StatusCode,
    pub entry_body: String,
}

impl Default for StubResponses {
    fn default() -> Self {
        Self {
            probe_status: StatusCode::OK,
            entry_status: StatusCode::OK,
            entry_body: "[]".to_string(),
        }
    }
}

struct SharedState {
    responses: StubResponses,
    received: Mutex<Vec<ReceivedRequest>>,
}

impl SharedState {
    fn record(&self, path: &str, headers: HeaderMap, body: String) {
        self.received
            .lock()
            .expect("stub state poisoned")
            .push(ReceivedRequest {
                path: path.to_string(),
                headers,
                body,
            });
    }
}

pub struct StubServer {
    url: String,
    state: Arc<SharedState>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.state
            .received
            .lock()
            .expect("stub state poisoned")
            .clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.handle.abort();
    }
}

const PROBE_PATH: &str = "/api/plugins/hoyoverse/probe";
const SILVER_WOLF_PATH: &str = "/api/plugins/hoyoverse/silver-wolf";
const FURINA_PATH: &str = "/api/plugins/hoyoverse/furina";

async fn probe(
    State(state): State<Arc<SharedState>>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    state.record(PROBE_PATH, headers, body);
    state.responses.probe_status
}

async fn silver_wolf(
    State(state): State<Arc<SharedState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.record(SILVER_WOLF_PATH, headers, body);
    (
        state.responses.entry_status,
        state.responses.entry_body.clone(),
    )
}

async fn furina(
    State(state): State<Arc<SharedState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.record(FURINA_PATH, headers, body);
    (StatusCode::NOT_IMPLEMENTED, "furina is not ready".to_string())
}

/// Start a stand-in for the `hoyoverse` server plugin on a random local port.
pub async fn start_stub_plugin(responses: StubResponses) -> Result<StubServer, BoxedError> {
    let state = Arc::new(SharedState {
        responses,
        received: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route(PROBE_PATH, post(probe))
        .route(SILVER_WOLF_PATH, post(silver_wolf))
        .route(FURINA_PATH, post(furina))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let url = format!("http://{addr}");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });

        if let Err(err) = server.await {
            eprintln!("hoyoverse stub server error: {err}");
        }
    });

    Ok(StubServer {
        url,
        state,
        shutdown: Some(shutdown_tx),
        handle,
    })
}

pub fn bronya_response() -> String {
    serde_json::json!([{
        "name": "Bronya",
        "content": {
            "description": "",
            "modules": [
                { "name": "Stats", "data": [{ "key": "HP", "value": "1000" }] },
                { "name": "Empty", "data": [] }
            ]
        }
    }])
    .to_string()
}
