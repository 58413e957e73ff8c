//! Poll loop
//!
//! Runs one [`PollRefresh`] tick per item of a tick stream. The stream is
//! whatever timer the host has: a tokio interval natively, a DOM interval
//! in the browser.

use std::future::Future;
use std::sync::Arc;

use futures::future::{AbortHandle, Abortable};
use futures::{Stream, StreamExt};

use super::refresh::PollRefresh;
use crate::domain::Todo;
use crate::gateway::TodoGateway;

/// Stops a poll loop, including a fetch that is still in flight.
#[derive(Debug, Clone)]
pub struct PollAbort {
    handle: AbortHandle,
}

impl PollAbort {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

/// Build the poll loop future and its cancel handle.
///
/// Each successful snapshot goes to `apply`, which returns `false` once the
/// view it writes to is gone; the loop then ends. Failed ticks never reach
/// `apply`. The loop also ends when `ticks` does.
pub fn poll_loop<G, S, F>(
    refresh: Arc<PollRefresh<G>>,
    ticks: S,
    mut apply: F,
) -> (impl Future<Output = ()>, PollAbort)
where
    G: TodoGateway + ?Sized,
    S: Stream,
    F: FnMut(Vec<Todo>) -> bool,
{
    let (handle, registration) = AbortHandle::new_pair();

    let run = async move {
        let mut ticks = std::pin::pin!(ticks);
        while ticks.next().await.is_some() {
            if let Some(todos) = refresh.tick().await {
                if !apply(todos) {
                    log::debug!("Poll target dropped, stopping poll loop");
                    break;
                }
            }
        }
    };

    let run = async move {
        if Abortable::new(run, registration).await.is_err() {
            log::debug!("Poll loop cancelled");
        }
    };

    (run, PollAbort { handle })
}
