//! Scripted gateways used by the unit tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{GatewayError, GatewayResult, Todo};
use crate::gateway::TodoGateway;

/// Behaves like the remote store: creates append, lists return the store.
/// Queued list results take precedence over the store, one per call.
#[derive(Default)]
pub struct ScriptedGateway {
    store: Mutex<Vec<Todo>>,
    queued_lists: Mutex<VecDeque<Result<Vec<Todo>, String>>>,
    created: Mutex<Vec<String>>,
    list_calls: AtomicUsize,
    fail_creates: bool,
}

impl ScriptedGateway {
    pub fn new(store: Vec<Todo>) -> Self {
        Self {
            store: Mutex::new(store),
            ..Default::default()
        }
    }

    pub fn failing_creates(mut self) -> Self {
        self.fail_creates = true;
        self
    }

    pub fn then_list(self, result: Result<Vec<Todo>, &str>) -> Self {
        self.queued_lists
            .lock()
            .unwrap()
            .push_back(result.map_err(str::to_string));
        self
    }

    pub fn set_store(&self, todos: Vec<Todo>) {
        *self.store.lock().unwrap() = todos;
    }

    pub fn created_names(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TodoGateway for ScriptedGateway {
    async fn create_todo(&self, name: &str) -> GatewayResult<Todo> {
        self.created.lock().unwrap().push(name.to_string());
        if self.fail_creates {
            return Err(GatewayError::Transport("connection reset".into()));
        }
        let mut store = self.store.lock().unwrap();
        let todo = Todo::new(format!("new-{}", store.len() + 1), name);
        store.push(todo.clone());
        Ok(todo)
    }

    async fn list_todos(&self) -> GatewayResult<Vec<Todo>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(result) = self.queued_lists.lock().unwrap().pop_front() {
            return result.map_err(|message| GatewayError::GraphQl {
                messages: vec![message],
            });
        }
        Ok(self.store.lock().unwrap().clone())
    }
}

/// List calls block until a permit is added to `gate`.
pub struct GatedGateway {
    pub gate: tokio::sync::Semaphore,
    list_calls: AtomicUsize,
}

impl GatedGateway {
    pub fn new() -> Self {
        Self {
            gate: tokio::sync::Semaphore::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TodoGateway for GatedGateway {
    async fn create_todo(&self, name: &str) -> GatewayResult<Todo> {
        Ok(Todo::new("gated", name))
    }

    async fn list_todos(&self) -> GatewayResult<Vec<Todo>> {
        let call = self.list_calls.fetch_add(1, Ordering::SeqCst) + 1;
        let permit = self.gate.acquire().await.expect("gate closed");
        permit.forget();
        Ok(vec![Todo::new(call.to_string(), "gated")])
    }
}
