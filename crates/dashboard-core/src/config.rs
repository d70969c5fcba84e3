//! Search configuration constants.
//!
//! These values define how the dashboard search control behaves and which
//! query parameters it reads and writes. The app crate and the tests share
//! them so the URL format stays consistent.
//!
//! # Usage
//!
//! ```
//! use dashboard_core::config::{PAGE_PARAM, QUERY_PARAM, SEARCH_DEBOUNCE_MS};
//!
//! assert_eq!(QUERY_PARAM, "query");
//! assert_eq!(PAGE_PARAM, "page");
//! assert_eq!(SEARCH_DEBOUNCE_MS, 1000);
//! ```

// =============================================================================
// Debounce
// =============================================================================

/// Quiet interval, in milliseconds, after the last keystroke before the search
/// term is committed to the URL.
///
/// Only the final keystroke of a burst shorter than this is ever committed.
pub const SEARCH_DEBOUNCE_MS: u64 = 1000;

// =============================================================================
// Query parameters
// =============================================================================

/// Query parameter holding the free-text search term.
///
/// Absent (not empty) when no filter is active.
pub const QUERY_PARAM: &str = "query";

/// Query parameter holding the 1-based result page.
pub const PAGE_PARAM: &str = "page";

/// Page every committed search resets to.
pub const FIRST_PAGE: u32 = 1;

/// Placeholder shown by the search input when none is given.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_is_one_based() {
        assert_eq!(FIRST_PAGE, 1);
    }

    #[test]
    fn test_param_names_are_distinct() {
        assert_ne!(QUERY_PARAM, PAGE_PARAM);
    }
}
