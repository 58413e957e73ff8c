//! Domain Layer
//!
//! Todo entity and the error types shared by every layer above it.

mod entity;
mod error;
mod todo;

pub use entity::Entity;
pub use error::{ConfigError, GatewayError, GatewayResult};
pub use todo::Todo;
