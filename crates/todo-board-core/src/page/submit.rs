//! Create form submission

use crate::domain::{GatewayResult, Todo};
use crate::gateway::TodoGateway;
use super::revalidate::{Revalidate, HOME_PATH};

/// Extract the `name` field from submitted form fields.
///
/// A missing field becomes the empty string. No other validation.
pub fn name_field<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    fields
        .into_iter()
        .find(|(key, _)| *key == "name")
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}

/// Create a todo from the submitted name.
///
/// On success the home path is marked stale. Either way the outcome is
/// returned; the live view list is left alone until the next poll tick.
pub async fn submit_todo<G, R>(gateway: &G, revalidator: &R, name: &str) -> GatewayResult<Todo>
where
    G: TodoGateway + ?Sized,
    R: Revalidate + ?Sized,
{
    match gateway.create_todo(name).await {
        Ok(todo) => {
            log::info!("Created todo: {} ({:?})", todo.id, todo.name);
            revalidator.revalidate_path(HOME_PATH);
            Ok(todo)
        }
        Err(e) => {
            log::error!("Error creating todo: {} [{}]", e, e.error_code());
            Err(e)
        }
    }
}
