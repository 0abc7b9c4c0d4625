//! Handsign Server
//!
//! Thin HTTP transport over the handsign-core prediction pipeline: one
//! predict endpoint, a health route, and the startup wiring that resolves
//! and loads the model exactly once before serving.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::ServerConfig;
pub use routes::create_router;
pub use state::AppState;
