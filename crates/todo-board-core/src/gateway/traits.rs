//! Gateway Layer - Core Trait
//!
//! The two remote operations the board needs. Implementations can talk to
//! the real API or be scripted in tests.

use async_trait::async_trait;

use crate::domain::{GatewayResult, Todo};

/// Remote todo operations
///
/// Futures are `Send` on native targets so the poll scheduler can run on a
/// multi-threaded runtime. In the browser they are not.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TodoGateway {
    /// Create a todo with exactly the given name
    async fn create_todo(&self, name: &str) -> GatewayResult<Todo>;

    /// List every todo in server order
    async fn list_todos(&self) -> GatewayResult<Vec<Todo>>;
}
