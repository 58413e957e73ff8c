//! Todo List Component
//!
//! Renders the view list keyed by todo id, or the empty-state message.

use leptos::prelude::*;
use todo_board_core::{ListEntry, PageBody, ViewList, NO_TODOS_MESSAGE};

use crate::context::BoardContext;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let todos = ctx.todos;

    let entries = move || match todos.with(ViewList::body) {
        PageBody::List(entries) => entries,
        PageBody::Empty { .. } => Vec::new(),
    };

    view! {
        <Show
            when=move || !todos.with(ViewList::is_empty)
            fallback=|| view! { <p>{NO_TODOS_MESSAGE}</p> }
        >
            <ul>
                <For
                    each=entries
                    key=|entry: &ListEntry| entry.key.clone()
                    children=|entry: ListEntry| view! {
                        <li style="list-style: none;">{entry.name}</li>
                    }
                />
            </ul>
        </Show>
    }
}
