//! Debounced synchronization of the search input with the URL.
//!
//! [`SearchStateSync`] turns keystrokes into at most one navigation per quiet
//! period. Each call to [`on_text_changed`](SearchStateSync::on_text_changed)
//! (re)arms a timer; when the timer elapses the latest term is committed by
//! replacing the current history entry with
//! `current_path?<query with page=1 and query=term>`.
//!
//! ```text
//!            on_text_changed              on_text_changed
//!   Idle ─────────────────────▶ Pending ◀──────────────┐
//!    ▲                            │  └─────────────────┘ (timer re-armed)
//!    └──── elapsed / flush ───────┤
//!    └──── cancel (no commit) ────┘
//! ```
//!
//! The control never mutates query state itself; it reads the router's
//! current state at commit time and proposes a replacement.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{QUERY_PARAM, SEARCH_DEBOUNCE_MS};
use crate::routing::{HistoryMode, Router};
use crate::scheduler::{Scheduler, TimerHandle};

/// Tunables for [`SearchStateSync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSyncConfig {
    /// Quiet interval after the last keystroke before committing.
    pub debounce: Duration,
}

impl SearchSyncConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

impl Default for SearchSyncConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
        }
    }
}

/// Whether a commit is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Pending,
}

struct PendingCommit<H> {
    term: String,
    /// `None` until the scheduler hands back its handle.
    handle: Option<H>,
}

impl<H: TimerHandle> PendingCommit<H> {
    fn cancel_timer(self) -> String {
        if let Some(handle) = self.handle {
            handle.cancel();
        }
        self.term
    }
}

struct SyncInner<H> {
    pending: Option<PendingCommit<H>>,
    /// Bumped on every schedule and cancel; a firing timer only commits if
    /// its generation is still current.
    generation: u64,
    disposed: bool,
}

/// Keeps a search input and the URL query state in sync.
///
/// Construct one per mounted search input. The router is injected so the
/// control can be exercised against a [`MemoryRouter`](crate::MemoryRouter);
/// the scheduler decides what "time" means.
pub struct SearchStateSync<S: Scheduler> {
    router: Rc<dyn Router>,
    scheduler: S,
    config: SearchSyncConfig,
    initial_text: String,
    inner: Rc<RefCell<SyncInner<S::Handle>>>,
}

impl<S: Scheduler> SearchStateSync<S> {
    /// Mounts the control, seeding the displayed text from the router's
    /// current `query` parameter.
    pub fn new(router: Rc<dyn Router>, scheduler: S, config: SearchSyncConfig) -> Self {
        let initial_text = router
            .query_state()
            .get(QUERY_PARAM)
            .unwrap_or_default()
            .to_string();

        Self {
            router,
            scheduler,
            config,
            initial_text,
            inner: Rc::new(RefCell::new(SyncInner {
                pending: None,
                generation: 0,
                disposed: false,
            })),
        }
    }

    /// Text the input should display when first rendered.
    pub fn initial_text(&self) -> &str {
        &self.initial_text
    }

    pub fn state(&self) -> SyncState {
        if self.inner.borrow().pending.is_some() {
            SyncState::Pending
        } else {
            SyncState::Idle
        }
    }

    /// The term that will be committed when the current quiet period ends.
    pub fn pending_term(&self) -> Option<String> {
        self.inner
            .borrow()
            .pending
            .as_ref()
            .map(|pending| pending.term.clone())
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    /// Records a keystroke.
    ///
    /// Any previously scheduled commit is cancelled and `term` is scheduled
    /// for commit after the debounce interval. Ignored after
    /// [`dispose`](Self::dispose).
    pub fn on_text_changed(&self, term: impl Into<String>) {
        let term = term.into();

        // The pending term is recorded before scheduling so a scheduler that
        // fires synchronously still finds it.
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                debug!("search input changed after dispose; ignoring");
                return;
            }
            if let Some(previous) = inner.pending.take() {
                previous.cancel_timer();
            }
            inner.generation += 1;
            inner.pending = Some(PendingCommit {
                term: term.clone(),
                handle: None,
            });
            inner.generation
        };

        let callback = {
            let weak: Weak<RefCell<SyncInner<S::Handle>>> = Rc::downgrade(&self.inner);
            let router = Rc::clone(&self.router);
            move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let term = {
                    let mut inner = inner.borrow_mut();
                    if inner.disposed || inner.generation != generation {
                        return;
                    }
                    match inner.pending.take() {
                        Some(pending) => pending.term,
                        None => return,
                    }
                };
                commit(&*router, &term);
            }
        };

        debug!(term = %term, delay_ms = self.config.debounce.as_millis() as u64, "search commit scheduled");
        let handle = self.scheduler.schedule(self.config.debounce, Box::new(callback));

        let mut inner = self.inner.borrow_mut();
        let current = inner.generation == generation;
        match inner.pending.as_mut() {
            Some(pending) if current => pending.handle = Some(handle),
            // Already fired or superseded while scheduling
            _ => handle.cancel(),
        }
    }

    /// Commits the pending term immediately, if there is one.
    pub fn flush(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.generation += 1;
            inner.pending.take()
        };

        if let Some(pending) = pending {
            let term = pending.cancel_timer();
            commit(&*self.router, &term);
        }
    }

    /// Discards the pending term without committing it.
    pub fn cancel(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.pending.take()
        };

        if let Some(pending) = pending {
            let term = pending.cancel_timer();
            debug!(term = %term, "pending search commit cancelled");
        }
    }

    /// Tears the control down. The pending commit (if any) is cancelled and
    /// every later call becomes a no-op.
    pub fn dispose(&self) {
        self.cancel();
        self.inner.borrow_mut().disposed = true;
    }
}

impl<S: Scheduler> Drop for SearchStateSync<S> {
    fn drop(&mut self) {
        if !self.is_disposed() {
            self.dispose();
        }
    }
}

/// Replaces the current history entry with the committed search term.
fn commit(router: &dyn Router, term: &str) {
    let next = router.query_state().with_search_term(term);
    let pathname = router.pathname();
    let href = format!("{}?{}", pathname, next);

    match router.navigate(&href, HistoryMode::Replace) {
        Ok(()) => info!(%href, "search term committed"),
        Err(e) => warn!("Search navigation to {} failed: {}", href, e),
    }
}
