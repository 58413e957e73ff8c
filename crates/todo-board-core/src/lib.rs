//! Todo Board Core
//!
//! Layered architecture:
//! - domain: Todo entity and error types
//! - config: remote API configuration
//! - gateway: authenticated access to the remote GraphQL API
//! - page: view list, initial load, form submission and revalidation
//! - poll: fixed-interval refresh of the view list

pub mod config;
pub mod domain;
pub mod gateway;
pub mod page;
pub mod poll;

#[cfg(test)]
mod testing;

pub use config::{AuthType, BoardConfig};
pub use domain::{ConfigError, Entity, GatewayError, GatewayResult, Todo};
pub use gateway::{Credentials, GraphQlGateway, TodoGateway};
pub use page::{
    initial_load, name_field, refresh_home, submit_todo, ListEntry, PageBody, Revalidate, StalePaths, ViewList,
    HOME_PATH, NO_TODOS_MESSAGE,
};
pub use poll::{poll_loop, PollAbort, PollRefresh, PollState};

#[cfg(not(target_arch = "wasm32"))]
pub use poll::{spawn_poller, PollHandle, SharedViewList};
