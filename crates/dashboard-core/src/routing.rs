//! Router collaborator contract.
//!
//! The search control never owns the URL. It reads the current path and
//! query state through a [`Router`] and proposes replacements with
//! [`Router::navigate`]. Implementations:
//!
//! - [`MemoryRouter`] - In-memory history stack (desktop host, tests)
//! - `SignalRouter` - Dioxus signal + browser history (in app crate)

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;

use crate::error::NavigationError;
use crate::query::{Location, QueryState};

/// How a navigation affects the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Append a new entry (back button returns to the previous location)
    Push,
    /// Overwrite the current entry
    Replace,
}

/// Read/navigate access to the current location.
///
/// Routers live on the UI thread and are shared through `Rc`, so the trait
/// has no `Send` bound.
pub trait Router {
    /// Path of the current location, e.g. `/dashboard/invoices`.
    fn pathname(&self) -> String;

    /// Query parameters of the current location.
    fn query_state(&self) -> QueryState;

    /// Navigates to `href` (`path?query`).
    ///
    /// Completion is not awaited by callers; an error only means the request
    /// was refused up front.
    fn navigate(&self, href: &str, mode: HistoryMode) -> Result<(), NavigationError>;

    /// Convenience for `Location::new(pathname(), query_state())`.
    fn location(&self) -> Location {
        Location::new(self.pathname(), self.query_state())
    }
}

/// Most recent navigations a [`MemoryRouter`] remembers.
pub const NAVIGATION_LOG_CAPACITY: usize = 256;

/// A navigation accepted by a [`MemoryRouter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRecord {
    pub href: String,
    pub mode: HistoryMode,
}

#[derive(Debug)]
struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
    log: VecDeque<NavigationRecord>,
    unavailable: Option<String>,
}

/// In-memory history stack implementing [`Router`].
///
/// Clones share the same history, so a test can keep one handle for
/// inspection while the search control holds another.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    history: Rc<RefCell<MemoryHistory>>,
}

impl MemoryRouter {
    /// Creates a router whose single history entry is `location`.
    pub fn new(location: Location) -> Self {
        Self {
            history: Rc::new(RefCell::new(MemoryHistory {
                entries: vec![location],
                index: 0,
                log: VecDeque::new(),
                unavailable: None,
            })),
        }
    }

    /// Creates a router starting at `href`.
    pub fn at(href: &str) -> Result<Self, NavigationError> {
        Ok(Self::new(Location::parse(href)?))
    }

    pub fn current(&self) -> Location {
        let history = self.history.borrow();
        history.entries[history.index].clone()
    }

    /// Number of entries in the history stack.
    pub fn history_len(&self) -> usize {
        self.history.borrow().entries.len()
    }

    /// Navigations accepted so far, oldest first.
    ///
    /// Only the last [`NAVIGATION_LOG_CAPACITY`] are kept.
    pub fn navigations(&self) -> Vec<NavigationRecord> {
        self.history.borrow().log.iter().cloned().collect()
    }

    /// Moves one entry back. Returns `false` at the start of history.
    pub fn back(&self) -> bool {
        let mut history = self.history.borrow_mut();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    /// Moves one entry forward. Returns `false` at the end of history.
    pub fn forward(&self) -> bool {
        let mut history = self.history.borrow_mut();
        if history.index + 1 >= history.entries.len() {
            return false;
        }
        history.index += 1;
        true
    }

    /// Makes every subsequent navigation fail with
    /// [`NavigationError::Unavailable`] until cleared with `None`.
    pub fn set_unavailable(&self, reason: Option<String>) {
        self.history.borrow_mut().unavailable = reason;
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

impl Router for MemoryRouter {
    fn pathname(&self) -> String {
        let history = self.history.borrow();
        history.entries[history.index].pathname.clone()
    }

    fn query_state(&self) -> QueryState {
        let history = self.history.borrow();
        history.entries[history.index].query.clone()
    }

    fn navigate(&self, href: &str, mode: HistoryMode) -> Result<(), NavigationError> {
        let mut history = self.history.borrow_mut();
        if let Some(reason) = &history.unavailable {
            return Err(NavigationError::Unavailable(reason.clone()));
        }

        let location = Location::parse(href)?;
        match mode {
            HistoryMode::Push => {
                // Pushing discards any forward entries
                let keep = history.index + 1;
                history.entries.truncate(keep);
                history.entries.push(location);
                history.index = keep;
            }
            HistoryMode::Replace => {
                let index = history.index;
                history.entries[index] = location;
            }
        }
        if history.log.len() == NAVIGATION_LOG_CAPACITY {
            history.log.pop_front();
        }
        history.log.push_back(NavigationRecord {
            href: href.to_string(),
            mode,
        });

        debug!(href, ?mode, "memory router navigated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites_current_entry() {
        let router = MemoryRouter::at("/dashboard/invoices?page=2").unwrap();
        router
            .navigate("/dashboard/invoices?page=1&query=a", HistoryMode::Replace)
            .unwrap();

        assert_eq!(router.history_len(), 1);
        assert_eq!(router.query_state().search_term(), Some("a"));
        assert!(!router.back());
    }

    #[test]
    fn test_push_appends_and_truncates_forward_entries() {
        let router = MemoryRouter::at("/a").unwrap();
        router.navigate("/b", HistoryMode::Push).unwrap();
        router.navigate("/c", HistoryMode::Push).unwrap();
        assert_eq!(router.history_len(), 3);

        assert!(router.back());
        assert!(router.back());
        assert_eq!(router.pathname(), "/a");

        router.navigate("/d", HistoryMode::Push).unwrap();
        assert_eq!(router.history_len(), 2);
        assert!(!router.forward());
        assert_eq!(router.pathname(), "/d");
    }

    #[test]
    fn test_invalid_href_is_rejected_and_not_logged() {
        let router = MemoryRouter::default();
        let err = router.navigate("no-slash", HistoryMode::Push).unwrap_err();
        assert_eq!(err, NavigationError::InvalidHref("no-slash".into()));
        assert!(router.navigations().is_empty());
    }

    #[test]
    fn test_unavailable_router_refuses_navigation() {
        let router = MemoryRouter::default();
        router.set_unavailable(Some("shutting down".into()));
        assert!(matches!(
            router.navigate("/x", HistoryMode::Replace),
            Err(NavigationError::Unavailable(_))
        ));

        router.set_unavailable(None);
        assert!(router.navigate("/x", HistoryMode::Replace).is_ok());
    }

    #[test]
    fn test_navigation_log_keeps_most_recent_entries() {
        let router = MemoryRouter::default();
        for i in 0..NAVIGATION_LOG_CAPACITY + 10 {
            router
                .navigate(&format!("/?page={i}"), HistoryMode::Replace)
                .unwrap();
        }

        let log = router.navigations();
        assert_eq!(log.len(), NAVIGATION_LOG_CAPACITY);
        assert_eq!(log[0].href, "/?page=10");
        assert_eq!(
            log[NAVIGATION_LOG_CAPACITY - 1].href,
            format!("/?page={}", NAVIGATION_LOG_CAPACITY + 9)
        );
    }

    #[test]
    fn test_clones_share_history() {
        let router = MemoryRouter::default();
        let observer = router.clone();
        router.navigate("/seen?x=1", HistoryMode::Replace).unwrap();
        assert_eq!(observer.current().href(), "/seen?x=1");
        assert_eq!(observer.location(), router.current());
    }
}
