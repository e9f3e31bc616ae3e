//! PawKeeper HTTP server.
//!
//! Library crate so integration tests can build the router and state the
//! same way the binary does.

pub mod api;
pub mod auth;
pub mod config;
pub mod email;
pub mod error;
pub mod main_lib;
pub mod scheduler;

pub use api::app_router;
pub use main_lib::{build_state, init_tracing, AppState};
