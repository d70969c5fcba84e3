//! Browser history backend (web platform only).

use dashboard_core::{HistoryMode, Location, NavigationError, QueryState, Router};
use wasm_bindgen::JsValue;

/// [`Router`] over `window.location` and `window.history`.
pub struct BrowserHistory {
    window: web_sys::Window,
}

impl BrowserHistory {
    pub fn new() -> Result<Self, NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::BrowserApiUnavailable)?;
        Ok(Self { window })
    }
}

impl Router for BrowserHistory {
    fn pathname(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn query_state(&self) -> QueryState {
        let search = self.window.location().search().unwrap_or_default();
        QueryState::parse(&search)
    }

    fn navigate(&self, href: &str, mode: HistoryMode) -> Result<(), NavigationError> {
        Location::parse(href)?;

        let history = self
            .window
            .history()
            .map_err(|_| NavigationError::BrowserApiUnavailable)?;

        let result = match mode {
            HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(href)),
            HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(href)),
        };

        result.map_err(|e| NavigationError::HistoryRejected(format!("{:?}", e)))
    }
}
