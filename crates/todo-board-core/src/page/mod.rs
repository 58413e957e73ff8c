//! Page Layer
//!
//! The home page's data flow: seed the view list before first render,
//! submit new todos, and mark rendered paths stale after a mutation.

mod load;
mod render;
mod revalidate;
mod submit;
mod view_list;

pub use load::initial_load;
pub use render::{ListEntry, PageBody, NO_TODOS_MESSAGE};
pub use revalidate::{refresh_home, Revalidate, StalePaths, HOME_PATH};
pub use submit::{name_field, submit_todo};
pub use view_list::ViewList;
