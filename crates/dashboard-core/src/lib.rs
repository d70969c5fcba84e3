//! # Dashboard Core
//!
//! Platform-independent state handling for the Acme dashboard front end.
//!
//! This crate keeps the search input and the shareable URL in sync without
//! depending on a particular UI runtime. The app crate plugs in a Dioxus-backed
//! router and task scheduler; tests and headless hosts use the in-memory ones
//! provided here.
//!
//! ## Modules
//!
//! - [`query`] - Ordered query-parameter state and locations (`path?query`)
//! - [`routing`] - Router collaborator contract and an in-memory history
//! - [`scheduler`] - Cancellable deferred callbacks with a virtual clock
//! - [`search`] - Debounced search-term to URL synchronization
//! - [`config`] - Debounce interval and parameter name constants
//! - [`error`] - Error types for navigation and query parsing

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod query;
pub mod routing;
pub mod scheduler;
pub mod search;

#[cfg(test)]
mod test_utils;

pub use error::{NavigationError, QueryStateError};
pub use query::{Location, QueryState};
pub use routing::{HistoryMode, MemoryRouter, NavigationRecord, Router};
pub use scheduler::{Callback, ManualScheduler, ManualTimer, Scheduler, TimerHandle};
pub use search::{SearchStateSync, SearchSyncConfig, SyncState};
