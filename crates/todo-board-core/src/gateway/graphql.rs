//! GraphQL gateway
//!
//! Sends the two board operations as JSON POSTs to the configured endpoint.
//! Works natively and in the browser.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::session::Credentials;
use super::traits::TodoGateway;
use crate::config::BoardConfig;
use crate::domain::{GatewayError, GatewayResult, Todo};

pub const CREATE_TODO_MUTATION: &str = "mutation CreateTodo($input: CreateTodoInput!) {
  createTodo(input: $input) {
    id
    name
  }
}";

pub const LIST_TODOS_QUERY: &str = "query ListTodos {
  listTodos {
    items {
      id
      name
    }
  }
}";

// ========================
// Wire Types
// ========================

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

#[derive(Debug, Serialize)]
pub struct CreateTodoVariables<'a> {
    pub input: CreateTodoInput<'a>,
}

#[derive(Debug, Serialize)]
pub struct CreateTodoInput<'a> {
    pub name: &'a str,
}

impl<'a> GraphQlRequest<'a, CreateTodoVariables<'a>> {
    pub fn create_todo(name: &'a str) -> Self {
        Self {
            query: CREATE_TODO_MUTATION,
            variables: Some(CreateTodoVariables {
                input: CreateTodoInput { name },
            }),
        }
    }
}

impl GraphQlRequest<'static, ()> {
    pub fn list_todos() -> Self {
        Self {
            query: LIST_TODOS_QUERY,
            variables: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Response envelope: `data` and/or `errors`
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<D> {
    data: Option<D>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

impl<D> GraphQlResponse<D> {
    /// Any reported error fails the call, even when partial data came back.
    pub fn into_data(self) -> GatewayResult<D> {
        match self.errors {
            Some(errors) if !errors.is_empty() => Err(GatewayError::GraphQl {
                messages: errors.into_iter().map(|e| e.message).collect(),
            }),
            _ => self.data.ok_or(GatewayError::MissingData { field: "data" }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTodoData {
    create_todo: Option<Todo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListTodosData {
    list_todos: Option<TodoConnection>,
}

#[derive(Debug, Deserialize)]
struct TodoConnection {
    items: Vec<Todo>,
}

// ========================
// Gateway
// ========================

/// Gateway bound to one endpoint and one set of credentials
pub struct GraphQlGateway {
    client: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl GraphQlGateway {
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            credentials,
        }
    }

    /// Build the gateway for one incoming request
    pub fn for_request(config: &BoardConfig, cookie_header: &str) -> Self {
        Self::new(
            config.endpoint.clone(),
            Credentials::from_cookie_header(config, cookie_header),
        )
    }

    async fn execute<V, D>(&self, request: &GraphQlRequest<'_, V>) -> GatewayResult<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let builder = self.client.post(&self.endpoint).json(request);
        let response = self.credentials.apply(builder).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let envelope: GraphQlResponse<D> = response.json().await?;
        envelope.into_data()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TodoGateway for GraphQlGateway {
    async fn create_todo(&self, name: &str) -> GatewayResult<Todo> {
        let data: CreateTodoData = self.execute(&GraphQlRequest::create_todo(name)).await?;
        data.create_todo
            .ok_or(GatewayError::MissingData { field: "createTodo" })
    }

    async fn list_todos(&self) -> GatewayResult<Vec<Todo>> {
        let data: ListTodosData = self.execute(&GraphQlRequest::list_todos()).await?;
        data.list_todos
            .map(|connection| connection.items)
            .ok_or(GatewayError::MissingData { field: "listTodos" })
    }
}
