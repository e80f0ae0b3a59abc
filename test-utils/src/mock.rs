//! Mock license seller API.
//!
//! Runs a small axum server on a random local port. Every request, whatever its path,
//! is recorded and answered with the next scripted reply. When the script runs out the
//! server answers `500` with an explanatory body so a missing reply shows up clearly in
//! the failing assertion.

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    Router,
};
use std::{
    collections::VecDeque,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::task::JoinHandle;

use crate::error::TestError;

/// Body returned when no scripted reply is left.
pub const UNSCRIPTED_BODY: &str = "mock license api: no scripted reply left";

/// A scripted reply.
#[derive(Debug, Clone)]
struct MockReply {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

/// A request received by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Decoded query parameters in the order they were sent.
    pub query: Vec<(String, String)>,
    /// `User-Agent` header, if sent.
    pub user_agent: Option<String>,
    /// `Accept` header, if sent.
    pub accept: Option<String>,
}

impl RecordedRequest {
    /// Value of the first query parameter called `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Names of all query parameters in the order they were sent.
    pub fn param_names(&self) -> Vec<&str> {
        self.query.iter().map(|(key, _)| key.as_str()).collect()
    }
}

#[derive(Default)]
struct MockState {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Handle to a running mock license API.
///
/// The server task is aborted when the handle is dropped.
pub struct MockLicenseApi {
    addr: SocketAddr,
    state: Arc<MockState>,
    server: JoinHandle<()>,
}

impl MockLicenseApi {
    /// Starts the mock server on `127.0.0.1` with an OS-assigned port.
    ///
    /// # Returns
    /// - `Ok(MockLicenseApi)` - Server is listening and ready for requests
    /// - `Err(TestError::MockServer)` - Failed to bind the listening socket
    pub async fn start() -> Result<Self, TestError> {
        let state = Arc::new(MockState::default());

        let router = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    /// Seller API URL of the mock server, with a trailing slash like the real one.
    pub fn url(&self) -> String {
        format!("http://{}/api/seller/", self.addr)
    }

    /// Queues a reply.
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.push(MockReply {
            status,
            body: body.to_string(),
            delay: None,
        })
    }

    /// Queues a reply that is only sent after `delay`.
    pub fn reply_after(&self, delay: Duration, status: u16, body: &str) -> &Self {
        self.push(MockReply {
            status,
            body: body.to_string(),
            delay: Some(delay),
        })
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("mock request log poisoned")
            .clone()
    }

    fn push(&self, reply: MockReply) -> &Self {
        self.state
            .replies
            .lock()
            .expect("mock reply queue poisoned")
            .push_back(reply);
        self
    }
}

impl Drop for MockLicenseApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Returns a URL on `127.0.0.1` where nothing is listening.
///
/// Binds a socket to obtain a free port and closes it again immediately.
pub async fn unreachable_url() -> Result<String, TestError> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/api/seller/", addr))
}

async fn handle_request(
    State(state): State<Arc<MockState>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let query = query
        .map(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default();

    state
        .requests
        .lock()
        .expect("mock request log poisoned")
        .push(RecordedRequest {
            query,
            user_agent: header("user-agent"),
            accept: header("accept"),
        });

    let reply = state
        .replies
        .lock()
        .expect("mock reply queue poisoned")
        .pop_front();

    let Some(reply) = reply else {
        return (StatusCode::INTERNAL_SERVER_ERROR, UNSCRIPTED_BODY.to_string());
    };

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, reply.body)
}
