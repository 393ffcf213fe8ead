//! HTTP server: application state, handlers, and router

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;
