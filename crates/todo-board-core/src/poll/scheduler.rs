//! Native poll scheduler
//!
//! Feeds [`poll_loop`] from a tokio interval. Must be started inside a
//! tokio runtime.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::driver::{poll_loop, PollAbort};
use super::refresh::PollRefresh;
use crate::domain::Todo;
use crate::gateway::TodoGateway;
use crate::page::ViewList;

/// View list owned by one mounted page and shared with its poller
#[derive(Debug, Clone, Default)]
pub struct SharedViewList {
    inner: Arc<RwLock<ViewList>>,
}

impl SharedViewList {
    pub fn new(view: ViewList) -> Self {
        Self {
            inner: Arc::new(RwLock::new(view)),
        }
    }

    pub fn snapshot(&self) -> ViewList {
        self.read().clone()
    }

    pub fn replace(&self, todos: Vec<Todo>) {
        self.write().replace(todos);
    }

    // Replacement is a single assignment, so a poisoned lock still holds a whole list.
    fn read(&self) -> RwLockReadGuard<'_, ViewList> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ViewList> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Running poll timer. Cancelling or dropping it stops all further ticks.
pub struct PollHandle {
    abort: PollAbort,
}

impl PollHandle {
    pub fn cancel(self) {
        self.abort.cancel();
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.abort.cancel();
    }
}

/// Start polling. The first tick fires one full `period` after this call;
/// each fetch completes before the next wait begins.
pub fn spawn_poller<G>(refresh: Arc<PollRefresh<G>>, view: SharedViewList, period: Duration) -> PollHandle
where
    G: TodoGateway + Send + Sync + ?Sized + 'static,
{
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let ticks = futures::stream::unfold(ticker, |mut ticker| async move {
        ticker.tick().await;
        Some(((), ticker))
    });

    let (run, abort) = poll_loop(refresh, ticks, move |todos| {
        view.replace(todos);
        true
    });
    tokio::spawn(run);
    PollHandle { abort }
}
