//! Initial load
//!
//! Runs once per page request, before the first render.

use crate::gateway::TodoGateway;
use super::view_list::ViewList;

/// Seed the view list. A failed fetch is logged and yields an empty list,
/// so the page renders its "no todos" state instead of an error.
pub async fn initial_load<G>(gateway: &G) -> ViewList
where
    G: TodoGateway + ?Sized,
{
    match gateway.list_todos().await {
        Ok(todos) => {
            log::debug!("Initial load fetched {} todos", todos.len());
            ViewList::new(todos)
        }
        Err(e) => {
            log::error!("Error fetching initial todos: {} [{}]", e, e.error_code());
            ViewList::default()
        }
    }
}
