//! Reactive routing for the dashboard.
//!
//! [`SignalRouter`] decorates a history backend with a Dioxus signal holding
//! the current [`Location`]. Every successful navigation is written to the
//! backend first and then mirrored into the signal, so components that read
//! the signal (the rendering side) re-render when the query changes while the
//! search input only ever talks to the [`Router`] trait.
//!
//! # Backends
//!
//! - **Web**: [`BrowserHistory`] (`window.location` + `history.*State`)
//! - **Desktop / fallback**: [`MemoryRouter`] starting at [`DEFAULT_PATH`]

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

use std::rc::Rc;

use dashboard_core::{HistoryMode, Location, MemoryRouter, NavigationError, QueryState, Router};
use dioxus::logger::tracing::debug;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

/// Location the desktop app opens at.
pub const DEFAULT_PATH: &str = "/dashboard/invoices";

/// History backend for the current platform.
///
/// On web this is the browser's own history; if the window is unavailable
/// (e.g. running inside a worker) it falls back to an in-memory stack.
pub fn platform_history() -> Rc<dyn Router> {
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserHistory::new() {
            Ok(history) => return Rc::new(history),
            Err(e) => error!("Browser history unavailable, using in-memory history: {}", e),
        }
    }

    Rc::new(MemoryRouter::new(default_location()))
}

/// Location used when there is no address bar to read from.
pub fn default_location() -> Location {
    Location::new(DEFAULT_PATH, QueryState::new())
}

/// Router that mirrors the current location into a signal.
#[derive(Clone)]
pub struct SignalRouter {
    location: Signal<Location>,
    backend: Rc<dyn Router>,
}

impl SignalRouter {
    pub fn new(location: Signal<Location>, backend: Rc<dyn Router>) -> Self {
        Self { location, backend }
    }

    /// Reactive view of the current location. Reading it subscribes the
    /// calling component to navigation changes.
    pub fn location_signal(&self) -> Signal<Location> {
        self.location
    }

    /// Re-reads the backend after a navigation this router did not initiate
    /// (browser back/forward).
    pub fn sync_from_backend(&self) {
        let mut location = self.location;
        location.set(self.backend.location());
    }
}

impl Router for SignalRouter {
    // Reads use peek() so callers outside of rendering never subscribe.
    fn pathname(&self) -> String {
        self.location.peek().pathname.clone()
    }

    fn query_state(&self) -> QueryState {
        self.location.peek().query.clone()
    }

    fn navigate(&self, href: &str, mode: HistoryMode) -> Result<(), NavigationError> {
        let next = Location::parse(href)?;
        self.backend.navigate(href, mode)?;

        debug!("Navigated ({:?}) to {}", mode, href);
        let mut location = self.location;
        location.set(next);
        Ok(())
    }
}

/// Access the router from context.
pub fn use_router() -> SignalRouter {
    use_context::<SignalRouter>()
}

/// Create the router for this platform and provide it to the component tree.
pub fn provide_router() -> SignalRouter {
    let backend = use_hook(platform_history);
    let location = use_signal({
        let backend = backend.clone();
        move || backend.location()
    });
    use_context_provider(|| SignalRouter::new(location, backend))
}
