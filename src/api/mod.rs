//! HTTP API over the record store and query engine.
//!
//! Routes are nested under `/api/`. Every request passes through the
//! access logger; the browser front-end is allowed through CORS.
//!
//! The router is composable: `api_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer, ApiSession};
pub use types::ApiContext;
