//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks count their calls so tests can assert that a refused
//! credential never reaches the domain layer. The in-memory repositories
//! from `adapters::memory` double as repository fakes.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

use axum::Router;

/// Serve `router` on an ephemeral loopback port and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test upstream crashed");
    });

    format!("http://{}", addr)
}
