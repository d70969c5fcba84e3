//! Error types for dashboard-core.
//!
//! The search control itself never fails; these errors come from the router
//! collaborator and from reading typed values back out of the query string.

use thiserror::Error;

/// Errors reported by a [`Router`](crate::routing::Router) when a navigation
/// request cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The target was not a path-plus-query string
    #[error("Invalid navigation target: {0}")]
    InvalidHref(String),
    /// Window, location or history object missing (not running in a browser)
    #[error("Browser history API unavailable")]
    BrowserApiUnavailable,
    /// The browser refused the history update
    #[error("History update rejected: {0}")]
    HistoryRejected(String),
    /// The router is not accepting navigations
    #[error("Router unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when reading typed values from a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryStateError {
    /// `page` is not a positive integer
    #[error("Invalid page number: {0:?}")]
    InvalidPage(String),
}
