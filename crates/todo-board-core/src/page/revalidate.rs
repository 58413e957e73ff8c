//! Path revalidation
//!
//! After a mutation the server-rendered home page is out of date. The next
//! navigation to a stale path re-runs its initial load.

use std::collections::BTreeSet;
use std::sync::Mutex;

use crate::domain::Todo;
use super::view_list::ViewList;

pub const HOME_PATH: &str = "/";

/// Marks a previously rendered path for recomputation
pub trait Revalidate {
    fn revalidate_path(&self, path: &str);
}

/// In-process registry of stale paths
#[derive(Debug, Default)]
pub struct StalePaths {
    paths: Mutex<BTreeSet<String>>,
}

impl StalePaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_stale(&self, path: &str) -> bool {
        self.lock().contains(path)
    }

    /// Consume the mark for `path`, returning whether it was set
    pub fn take_stale(&self, path: &str) -> bool {
        self.lock().remove(path)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeSet<String>> {
        // The set stays consistent even if a holder panicked.
        self.paths.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Revalidate for StalePaths {
    fn revalidate_path(&self, path: &str) {
        log::debug!("Revalidating path {}", path);
        self.lock().insert(path.to_string());
    }
}

/// Apply a fresh home-page snapshot. The home page is recomputed from it,
/// so a pending stale mark for it is consumed.
pub fn refresh_home(view: &mut ViewList, stale_paths: &StalePaths, todos: Vec<Todo>) {
    if stale_paths.take_stale(HOME_PATH) {
        log::debug!("Stale path {} recomputed by poll tick", HOME_PATH);
    }
    view.replace(todos);
}
