//! Board Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use todo_board_core::{StalePaths, ViewList};

#[derive(Clone)]
pub struct BoardContext {
    /// Last-known server state, replaced wholesale by the poller
    pub todos: RwSignal<ViewList>,
    /// Paths marked for recomputation after a create
    pub stale_paths: Arc<StalePaths>,
}

impl BoardContext {
    pub fn new(todos: RwSignal<ViewList>, stale_paths: Arc<StalePaths>) -> Self {
        Self { todos, stale_paths }
    }
}
