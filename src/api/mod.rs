//! Reception API.
//!
//! Exposes the agenda, reports, patient search and demo-data actions as
//! JSON endpoints for the reception screen. Routes are nested under
//! `/api/` and pass through CORS, a no-store cache header and the access
//! log before reaching the handler.
//!
//! The router is composable: `reception_api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::reception_api_router;
pub use server::{start_server, ReceptionServer, ServerError, ServerSession};
pub use types::ApiContext;
