//! promptduel web API: an axum JSON service wrapping the dispatch engine.
//!
//! Routes mirror the desktop UI contract: run a comparison, edit the
//! provider configuration, and manage saved prompts.

pub use provider::{Provider, standard_registry};
pub use routes::router;
pub use serve::serve;
pub use state::AppState;

mod provider;
mod routes;
mod serve;
mod state;
