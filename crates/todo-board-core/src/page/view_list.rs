//! View list
//!
//! Last-known server state. Always replaced as a whole, never merged.

use crate::domain::Todo;
use super::render::{ListEntry, PageBody, NO_TODOS_MESSAGE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewList {
    todos: Vec<Todo>,
}

impl ViewList {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// Replace the whole list with a fresh snapshot
    pub fn replace(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// What the page shows for this list
    pub fn body(&self) -> PageBody {
        if self.todos.is_empty() {
            return PageBody::Empty {
                message: NO_TODOS_MESSAGE,
            };
        }
        PageBody::List(self.todos.iter().map(ListEntry::from).collect())
    }
}

impl From<Vec<Todo>> for ViewList {
    fn from(todos: Vec<Todo>) -> Self {
        Self::new(todos)
    }
}
