use std::rc::Rc;

use dashboard_core::config::DEFAULT_SEARCH_PLACEHOLDER;
use dashboard_core::{Router, SearchStateSync, SearchSyncConfig};
use dioxus::prelude::*;

use crate::components::MagnifyingGlassIcon;
use crate::platform::TaskScheduler;
use crate::routing::use_router;

/// Search input kept in sync with the `query` URL parameter.
///
/// Typing schedules a commit after a quiet period; Enter commits right away.
/// The displayed text is seeded from the URL when the input mounts, so a shared
/// link shows its search term without any typing.
#[component]
pub fn Search(
    #[props(into, default = DEFAULT_SEARCH_PLACEHOLDER.to_string())] placeholder: String,
) -> Element {
    let router = use_router();
    let sync = use_hook(move || {
        let router: Rc<dyn Router> = Rc::new(router);
        Rc::new(SearchStateSync::new(
            router,
            TaskScheduler,
            SearchSyncConfig::default(),
        ))
    });
    let mut text = use_signal({
        let sync = sync.clone();
        move || sync.initial_text().to_string()
    });

    // Unmounting must not leave a commit behind
    use_drop({
        let sync = sync.clone();
        move || sync.dispose()
    });

    let handle_input = {
        let sync = sync.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            text.set(value.clone());
            sync.on_text_changed(value);
        }
    };

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            sync.flush();
        }
    };

    rsx! {
        div { class: "dash-search",
            label { r#for: "search", class: "sr-only", "Search" }
            input {
                id: "search",
                class: "dash-search-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: handle_input,
                onkeydown: handle_keydown,
            }
            MagnifyingGlassIcon { class: "dash-search-icon" }
        }
    }
}
