//! Test utilities for dashboard-core.
//!
//! Shared fixtures for unit tests. Only compiled when running tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::routing::MemoryRouter;
use crate::scheduler::{Callback, ManualScheduler, Scheduler, TimerHandle};
use crate::search::{SearchStateSync, SearchSyncConfig};

/// Shorthand for `Duration::from_millis`.
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Mounts a search control on a fresh router positioned at `href`.
///
/// Returns the router (for inspecting navigations), the virtual clock, and
/// the control itself.
///
/// # Panics
///
/// Panics if `href` is not an absolute path.
pub fn mount(href: &str) -> (MemoryRouter, ManualScheduler, SearchStateSync<ManualScheduler>) {
    let router = MemoryRouter::at(href).expect("test href must be an absolute path");
    let scheduler = ManualScheduler::new();
    let sync = SearchStateSync::new(
        Rc::new(router.clone()),
        scheduler.clone(),
        SearchSyncConfig::default(),
    );
    (router, scheduler, sync)
}

/// Handle whose `cancel` does nothing.
pub struct IgnoredCancel;

impl TimerHandle for IgnoredCancel {
    fn cancel(self) {}
}

/// Runs every callback inside `schedule`, regardless of delay.
#[derive(Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    type Handle = IgnoredCancel;

    fn schedule(&self, _delay: Duration, callback: Callback) -> IgnoredCancel {
        callback();
        IgnoredCancel
    }
}

/// Keeps every callback, including cancelled ones, until `fire_all`.
///
/// Models a task-based scheduler where a cancelled timer can still run.
#[derive(Clone, Default)]
pub struct UncancellableScheduler {
    queued: Rc<RefCell<Vec<Callback>>>,
}

impl UncancellableScheduler {
    /// Runs all queued callbacks in scheduling order.
    pub fn fire_all(&self) {
        let queued: Vec<Callback> = self.queued.borrow_mut().drain(..).collect();
        for callback in queued {
            callback();
        }
    }
}

impl Scheduler for UncancellableScheduler {
    type Handle = IgnoredCancel;

    fn schedule(&self, _delay: Duration, callback: Callback) -> IgnoredCancel {
        self.queued.borrow_mut().push(callback);
        IgnoredCancel
    }
}
