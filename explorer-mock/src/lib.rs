/// Explorer Mock Server Library
///
/// This crate provides both a standalone binary and library components
/// for mocking a WhatsOnChain-style explorer API from in-memory fixtures.
pub mod handlers;
pub mod server;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use server::{create_router, run_server, spawn_on_listener};
pub use store::FixtureStore;
pub use types::*;
