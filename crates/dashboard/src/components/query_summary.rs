use dashboard_core::QueryState;
use dioxus::prelude::*;

use crate::routing::use_router;

/// One-line description of the active filter, e.g.
/// `Showing "acme" · page 1`.
pub fn describe_query(query: &QueryState) -> String {
    let page = match query.page() {
        Ok(page) => format!("page {}", page),
        Err(e) => e.to_string(),
    };

    match query.search_term() {
        Some(term) => format!("Showing \"{}\" · {}", term, page),
        None => format!("All invoices · {}", page),
    }
}

/// Active-filter panel. Subscribes to the location signal, so it re-renders
/// every time the search input commits.
#[component]
pub fn QuerySummary() -> Element {
    let router = use_router();
    let location = router.location_signal();
    let summary = describe_query(&location.read().query);

    rsx! {
        section { class: "dash-summary",
            p { class: "dash-summary-text", "{summary}" }
        }
    }
}
