//! Gateway Layer
//!
//! Authenticated access to the remote todo API. A gateway is built for one
//! request from that request's credentials and handed to whoever needs it.

mod graphql;
mod session;
mod traits;

pub use graphql::{
    CreateTodoInput, CreateTodoVariables, GraphQlGateway, GraphQlRequest, GraphQlResponse,
    CREATE_TODO_MUTATION, LIST_TODOS_QUERY,
};
pub use session::{parse_cookies, Credentials};
pub use traits::TodoGateway;
