//! Acme Dashboard - Dioxus front end.
//!
//! A dashboard page whose search input stays in sync with the shareable URL.
//! The synchronization logic lives in `dashboard_core`; this crate supplies
//! the Dioxus pieces around it.
//!
//! # Architecture
//!
//! - **Routing**: [`routing::SignalRouter`] wraps a history backend (browser
//!   history on web, in-memory history on desktop) and mirrors the current
//!   location into a signal so views re-render when the query changes
//! - **Scheduling**: [`platform::TaskScheduler`] runs debounce timers as Dioxus
//!   tasks (`gloo-timers` on web, `tokio` on desktop)
//! - **Components**: the app shell, dashboard page, and search input
//!
//! # Platform Support
//!
//! - **Web (WASM)**: search state is written to the address bar with
//!   `history.replaceState`
//! - **Desktop**: search state lives in an in-memory history stack

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod routing;
