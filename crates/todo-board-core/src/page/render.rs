//! Render model shared by the browser view and tests

use crate::domain::{Entity, Todo};

pub const NO_TODOS_MESSAGE: &str = "No todos, please add one.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Empty { message: &'static str },
    List(Vec<ListEntry>),
}

/// One rendered row. `key` is the todo id, never its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub key: String,
    pub name: String,
}

impl From<&Todo> for ListEntry {
    fn from(todo: &Todo) -> Self {
        Self {
            key: todo.id(),
            name: todo.name.clone(),
        }
    }
}
