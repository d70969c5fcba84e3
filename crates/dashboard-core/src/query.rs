//! Query-parameter state and locations.
//!
//! [`QueryState`] mirrors the browser's search-params semantics: keys keep
//! their insertion order, a key may repeat, and serialization uses
//! `application/x-www-form-urlencoded` (spaces become `+`). A [`Location`] is a
//! path plus its query state, i.e. what a navigation targets.
//!
//! # Examples
//!
//! ```
//! use dashboard_core::QueryState;
//!
//! let mut params = QueryState::parse("?page=3&status=paid");
//! params.set("query", "acme corp");
//! assert_eq!(params.to_string(), "page=3&status=paid&query=acme+corp");
//!
//! let committed = params.with_search_term("");
//! assert_eq!(committed.to_string(), "page=1&status=paid");
//! ```

use std::fmt;

use url::form_urlencoded;

use crate::config::{FIRST_PAGE, PAGE_PARAM, QUERY_PARAM};
use crate::error::{NavigationError, QueryStateError};

/// Ordered mapping of query-parameter keys to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pairs: Vec<(String, String)>,
}

impl QueryState {
    /// Creates an empty query state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string, with or without the leading `?`.
    ///
    /// Percent-escapes and `+` are decoded. Parsing never fails; malformed
    /// escapes are kept as literal text, like the browser does.
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        let pairs = form_urlencoded::parse(input.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Sets `key` to `value`.
    ///
    /// The first existing occurrence is overwritten in place and any later
    /// duplicates are dropped. A new key is appended at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen_first = false;
                self.pairs.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    let keep = !seen_first;
                    seen_first = true;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Removes every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The active search term, if any.
    pub fn search_term(&self) -> Option<&str> {
        self.get(QUERY_PARAM)
    }

    /// The 1-based result page.
    ///
    /// A missing `page` means the first page. Zero, negative or non-numeric
    /// values are rejected.
    pub fn page(&self) -> Result<u32, QueryStateError> {
        let Some(raw) = self.get(PAGE_PARAM) else {
            return Ok(FIRST_PAGE);
        };
        match raw.trim().parse::<u32>() {
            Ok(page) if page >= FIRST_PAGE => Ok(page),
            _ => Err(QueryStateError::InvalidPage(raw.to_string())),
        }
    }

    /// Builds the state committed for a new search term.
    ///
    /// Copies `self`, resets `page` to the first page, and stores `term` under
    /// `query`. An empty term removes `query` instead of storing `""`. The page
    /// is reset even when the term is unchanged.
    pub fn with_search_term(&self, term: &str) -> QueryState {
        let mut next = self.clone();
        next.set(PAGE_PARAM, FIRST_PAGE.to_string());
        if term.is_empty() {
            next.remove(QUERY_PARAM);
        } else {
            next.set(QUERY_PARAM, term);
        }
        next
    }

    /// Serializes to `key=value&...` without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// A navigable location: an absolute path plus its query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub query: QueryState,
}

impl Location {
    pub fn new(pathname: impl Into<String>, query: QueryState) -> Self {
        Self {
            pathname: pathname.into(),
            query,
        }
    }

    /// Parses `"/path?query#fragment"`. The fragment is discarded.
    ///
    /// The path must be absolute; scheme-qualified URLs are rejected since
    /// navigation here never leaves the current origin.
    pub fn parse(href: &str) -> Result<Self, NavigationError> {
        let without_fragment = href.split('#').next().unwrap_or_default();
        let (pathname, search) = match without_fragment.split_once('?') {
            Some((path, search)) => (path, search),
            None => (without_fragment, ""),
        };

        if !pathname.starts_with('/') || pathname.starts_with("//") {
            return Err(NavigationError::InvalidHref(href.to_string()));
        }

        Ok(Self {
            pathname: pathname.to_string(),
            query: QueryState::parse(search),
        })
    }

    /// Renders `path?query`, or just `path` when the query is empty.
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.query)
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/", QueryState::new())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
