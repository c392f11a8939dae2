//! Person Server - in-memory backend for the persons REST API.
//!
//! Serves the endpoints the `person-mirror` client talks to, keeping the
//! collection in memory. Used as a local development backend and by the
//! end-to-end tests.

pub mod handler;
pub mod server;
pub mod store;

pub use server::{router, start_server, AppState};
pub use store::{PersonStore, StoreError};
