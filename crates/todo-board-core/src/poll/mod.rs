//! Poll Layer
//!
//! Refreshes the view list on a fixed period. [`PollRefresh`] is one tick,
//! [`poll_loop`] runs ticks off any timer stream. The native scheduler feeds
//! it a tokio interval; the browser feeds it a DOM interval.

mod driver;
mod refresh;
#[cfg(not(target_arch = "wasm32"))]
mod scheduler;

pub use driver::{poll_loop, PollAbort};
pub use refresh::{PollRefresh, PollState};
#[cfg(not(target_arch = "wasm32"))]
pub use scheduler::{spawn_poller, PollHandle, SharedViewList};
