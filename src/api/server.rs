//! Reception API server lifecycle: starts and stops the axum HTTP server
//! that serves the reception screen.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::reception_api_router;
use crate::core_state::CoreState;

// ═══════════════════════════════════════════════════════════
// Public types
// ═══════════════════════════════════════════════════════════

/// Metadata for a running reception API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSession {
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running reception API server.
pub struct ReceptionServer {
    pub session: ServerSession,
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind reception API server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to get server address: {0}")]
    LocalAddr(#[source] std::io::Error),
    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ReceptionServer {
    /// Address actually bound (resolves port 0).
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Send the shutdown signal without waiting. Safe to call twice.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Reception API server shutdown signal sent");
        }
    }

    /// Signal shutdown and wait for in-flight requests to drain.
    pub async fn stop(mut self) -> Result<(), ServerError> {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            handle.await?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// Server lifecycle
// ═══════════════════════════════════════════════════════════

/// Start the reception API server on `addr`.
///
/// Builds `reception_api_router` with its layers and spawns the axum
/// server in a background tokio task. Port 0 picks an ephemeral port.
pub async fn start_server(
    core: Arc<CoreState>,
    addr: SocketAddr,
) -> Result<ReceptionServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    let app = reception_api_router(core);

    let session = ServerSession {
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Local::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Reception API server received shutdown signal");
        };

        tracing::info!(%addr, "Reception API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Reception API server error: {e}");
        }

        tracing::info!("Reception API server stopped");
    });

    Ok(ReceptionServer {
        session,
        addr,
        shutdown_tx: Some(shutdown_tx),
        handle: Some(handle),
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn test_core() -> Arc<CoreState> {
        Arc::new(CoreState::new())
    }

    fn ephemeral() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let server = start_server(test_core(), ephemeral())
            .await
            .expect("server should start");

        assert!(server.session.port > 0);
        assert_eq!(server.addr().port(), server.session.port);

        let url = format!("http://{}/api/health", server.addr());
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "ok");

        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn server_serves_seed_and_agenda() {
        let server = start_server(test_core(), ephemeral())
            .await
            .expect("server should start");
        let base = format!("http://{}", server.addr());
        let client = reqwest::Client::new();

        let resp = client.post(format!("{base}/api/seed")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let resp = client.get(format!("{base}/api/agenda")).send().await.unwrap();
        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "no-store"
        );
        let agenda: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(agenda["kpis"]["total"], 4);

        let resp = reqwest::get(format!("{base}/nonexistent")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let first = start_server(test_core(), ephemeral())
            .await
            .expect("server should start");

        let err = start_server(test_core(), first.addr()).await.err().unwrap();
        assert!(matches!(err, ServerError::Bind { .. }));

        first.stop().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_server(test_core(), ephemeral())
            .await
            .expect("server should start");

        server.shutdown();
        server.shutdown();
        server.stop().await.unwrap();
    }
}
