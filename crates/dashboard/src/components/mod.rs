//! UI components for the Acme dashboard.
//!
//! - [`App`]: provides the router context and lays out the page
//! - [`DashboardPage`]: heading, search input, and active-filter summary
//! - [`Search`]: debounced search input synced with the URL
//! - [`QuerySummary`]: re-renders whenever the URL query changes
//!
//! # Context Providers
//!
//! ```ignore
//! // Access the router from any component
//! let router = use_router();
//!
//! // Subscribe to location changes
//! let location = router.location_signal();
//! let term = location.read().query.search_term().map(str::to_string);
//! ```

mod icons;
mod query_summary;
mod search;

pub use icons::MagnifyingGlassIcon;
pub use query_summary::{describe_query, QuerySummary};
pub use search::Search;

use dioxus::prelude::*;

use crate::routing::{provide_router, SignalRouter};

/// Placeholder for the invoice search box.
const INVOICE_SEARCH_PLACEHOLDER: &str = "Search invoices...";

/// Keep the location signal current when the user presses back/forward.
#[cfg(target_arch = "wasm32")]
fn use_history_listener(router: &SignalRouter) {
    let router = router.clone();
    use_hook(move || listen_for_history_changes(router));
}

/// Desktop history only changes through the router itself.
#[cfg(not(target_arch = "wasm32"))]
fn use_history_listener(_router: &SignalRouter) {}

#[cfg(target_arch = "wasm32")]
fn listen_for_history_changes(router: SignalRouter) {
    use dioxus::logger::tracing::error;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };

    let on_popstate = Closure::<dyn FnMut()>::new(move || router.sync_from_backend());
    if let Err(e) = window
        .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
    {
        error!("Failed to listen for history changes: {:?}", e);
    }
    // Listener lives as long as the page
    on_popstate.forget();
}

#[component]
pub fn App() -> Element {
    let router = provide_router();
    use_history_listener(&router);

    rsx! {
        div { class: "dash-app",
            DashboardPage {}
        }
    }
}

/// Dashboard overview: heading, search, and the active filter.
#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        main { class: "dash-main",
            h1 { class: "dash-title", "Dashboard" }

            div { class: "dash-toolbar",
                Search { placeholder: INVOICE_SEARCH_PLACEHOLDER }
            }

            QuerySummary {}
        }
    }
}
