//! Todo Board App
//!
//! Home page: create form above the polled todo list.

use std::sync::Arc;

use gloo_timers::future::IntervalStream;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_board_core::{poll_loop, refresh_home, GraphQlGateway, PollRefresh, StalePaths, ViewList};

use crate::components::{NewTodoForm, TodoList};
use crate::context::BoardContext;

#[component]
pub fn App(initial: ViewList, gateway: Arc<GraphQlGateway>, poll_interval_ms: u32) -> impl IntoView {
    let ctx = BoardContext::new(RwSignal::new(initial), Arc::new(StalePaths::new()));
    provide_context(ctx.clone());

    start_polling(ctx, gateway.clone(), poll_interval_ms);

    view! {
        <div style="max-width: 500px; margin: 0 auto; text-align: center; margin-top: 100px;">
            <NewTodoForm gateway=gateway />
            <TodoList />
        </div>
    }
}

/// Refresh the view list every `millis` until the owning component is cleaned up
fn start_polling(ctx: BoardContext, gateway: Arc<GraphQlGateway>, millis: u32) {
    let refresh = Arc::new(PollRefresh::new(gateway));
    let todos = ctx.todos;
    let stale_paths = ctx.stale_paths;

    let (run, abort) = poll_loop(refresh, IntervalStream::new(millis), move |fresh| {
        // None once the page is torn down, which ends the loop.
        todos
            .try_update(|view| refresh_home(view, &stale_paths, fresh))
            .is_some()
    });
    spawn_local(run);

    on_cleanup(move || abort.cancel());
}
