//! New Todo Form Component
//!
//! Single text input and submit button. Fire-and-forget: no loading state
//! and no optimistic insert.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_board_core::{submit_todo, GraphQlGateway};

use crate::browser;
use crate::context::BoardContext;

#[component]
pub fn NewTodoForm(gateway: Arc<GraphQlGateway>) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = browser::submitted_name(&ev);
        let gateway = gateway.clone();
        let stale_paths = ctx.stale_paths.clone();

        spawn_local(async move {
            // Outcome is logged by submit_todo; the list catches up on the next poll tick.
            let _ = submit_todo(gateway.as_ref(), stale_paths.as_ref(), &name).await;
        });
    };

    view! {
        <form on:submit=create_todo>
            <input name="name" placeholder="Add a todo" />
            <button type="submit">"Add"</button>
        </form>
    }
}
