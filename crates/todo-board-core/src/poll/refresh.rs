//! Poll tick state machine
//!
//! IdleWaiting -> Fetching -> IdleWaiting, once per tick.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::Todo;
use crate::gateway::TodoGateway;
use crate::page::ViewList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    IdleWaiting,
    Fetching,
}

pub struct PollRefresh<G: ?Sized> {
    gateway: Arc<G>,
    in_flight: AtomicUsize,
    ticks: AtomicU64,
}

/// Counts one fetch as in flight until dropped, including when the tick
/// future is cancelled mid-fetch.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<G> PollRefresh<G>
where
    G: TodoGateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            in_flight: AtomicUsize::new(0),
            ticks: AtomicU64::new(0),
        }
    }

    /// `Fetching` while any tick's fetch is outstanding. Browser ticks do
    /// not wait for each other, so several can overlap.
    pub fn state(&self) -> PollState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            PollState::Fetching
        } else {
            PollState::IdleWaiting
        }
    }

    /// Number of completed ticks, failed ones included
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    /// Run one tick.
    ///
    /// Returns the fresh snapshot, or `None` when the fetch failed. A failed
    /// tick is logged and skipped; the caller keeps its last-known list.
    pub async fn tick(&self) -> Option<Vec<Todo>> {
        let result = {
            let _in_flight = InFlight::enter(&self.in_flight);
            self.gateway.list_todos().await
        };
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst) + 1;

        match result {
            Ok(todos) => {
                log::debug!("Poll tick {} fetched {} todos", tick, todos.len());
                Some(todos)
            }
            Err(e) => {
                log::warn!("Poll tick {} failed, keeping last-known todos: {}", tick, e);
                None
            }
        }
    }

    /// Run one tick and apply it to `view`. Returns whether the list changed hands.
    pub async fn refresh(&self, view: &mut ViewList) -> bool {
        match self.tick().await {
            Some(todos) => {
                view.replace(todos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Todo;
    use crate::testing::{GatedGateway, ScriptedGateway};

    #[tokio::test]
    async fn test_state_is_fetching_only_while_in_flight() {
        let gateway = Arc::new(GatedGateway::new());
        let refresh = Arc::new(PollRefresh::new(gateway.clone()));
        assert_eq!(refresh.state(), PollState::IdleWaiting);

        let in_flight = {
            let refresh = refresh.clone();
            tokio::spawn(async move { refresh.tick().await })
        };
        tokio::task::yield_now().await;
        assert_eq!(refresh.state(), PollState::Fetching);
        assert_eq!(refresh.ticks(), 0);

        gateway.gate.add_permits(1);
        let todos = in_flight.await.unwrap();

        assert_eq!(todos, Some(vec![Todo::new("1", "gated")]));
        assert_eq!(refresh.state(), PollState::IdleWaiting);
        assert_eq!(refresh.ticks(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_ticks_stay_fetching_until_the_last_returns() {
        let gateway = Arc::new(GatedGateway::new());
        let refresh = Arc::new(PollRefresh::new(gateway.clone()));

        let first = tokio::spawn({
            let refresh = refresh.clone();
            async move { refresh.tick().await }
        });
        let second = tokio::spawn({
            let refresh = refresh.clone();
            async move { refresh.tick().await }
        });
        tokio::task::yield_now().await;
        assert_eq!(gateway.list_calls(), 2);

        gateway.gate.add_permits(1);
        first.await.unwrap();
        assert_eq!(refresh.state(), PollState::Fetching);

        gateway.gate.add_permits(1);
        second.await.unwrap();
        assert_eq!(refresh.state(), PollState::IdleWaiting);
        assert_eq!(refresh.ticks(), 2);
    }

    #[tokio::test]
    async fn test_dropped_tick_leaves_fetching_state() {
        let gateway = Arc::new(GatedGateway::new());
        let refresh = Arc::new(PollRefresh::new(gateway.clone()));

        let in_flight = tokio::spawn({
            let refresh = refresh.clone();
            async move { refresh.tick().await }
        });
        tokio::task::yield_now().await;
        assert_eq!(refresh.state(), PollState::Fetching);

        in_flight.abort();
        assert!(in_flight.await.unwrap_err().is_cancelled());
        assert_eq!(refresh.state(), PollState::IdleWaiting);
        assert_eq!(refresh.ticks(), 0);
    }

    #[tokio::test]
    async fn test_refresh_replaces_wholesale() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Todo::new("c", "C")]));
        let refresh = PollRefresh::new(gateway);
        let mut view = ViewList::new(vec![Todo::new("a", "A"), Todo::new("b", "B")]);

        assert!(refresh.refresh(&mut view).await);

        assert_eq!(view.todos(), &[Todo::new("c", "C")]);
    }

    #[tokio::test]
    async fn test_failed_tick_keeps_last_known_list() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Todo::new("c", "C")]).then_list(Err("timeout")));
        let refresh = PollRefresh::new(gateway);
        let mut view = ViewList::new(vec![Todo::new("a", "A")]);

        assert!(!refresh.refresh(&mut view).await);
        assert_eq!(view.todos(), &[Todo::new("a", "A")]);
        assert_eq!(refresh.state(), PollState::IdleWaiting);

        assert!(refresh.refresh(&mut view).await);
        assert_eq!(view.todos(), &[Todo::new("c", "C")]);
        assert_eq!(refresh.ticks(), 2);
    }
}
