//! URL locations as the shell sees them.
//!
//! The shell only cares about two things in a URL: the path (which route and
//! which contact) and the `q` search parameter. Everything else in the query
//! string is ignored. Query values use `application/x-www-form-urlencoded`
//! encoding, the same encoding a GET form submission produces.

use std::fmt;
use url::form_urlencoded;

/// Name of the search query parameter.
pub const SEARCH_PARAM: &str = "q";

/// A path plus the optional search query.
///
/// `query` is `None` when the URL has no `q` parameter at all and
/// `Some(String::new())` when it is present but empty; the two are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
}

impl Location {
    /// The root location `/` without a query.
    #[must_use]
    pub fn root() -> Self {
        Self::new("/")
    }

    /// Creates a location for `path` without a query.
    ///
    /// Relative paths (`contacts/1`) are resolved against the root.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: normalize_path(&path.into()),
            query: None,
        }
    }

    /// Returns this location with the search query set to `query`.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Parses an href such as `/contacts/1?q=ada#top`.
    ///
    /// The fragment is dropped. When `q` appears more than once the first
    /// occurrence wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::app::Location;
    ///
    /// let location = Location::parse("/?q=ada+love");
    /// assert_eq!(location.path, "/");
    /// assert_eq!(location.query.as_deref(), Some("ada love"));
    ///
    /// assert_eq!(Location::parse("contacts/7").path, "/contacts/7");
    /// assert_eq!(Location::parse("/?q=").query.as_deref(), Some(""));
    /// assert_eq!(Location::parse("/?other=1").query, None);
    /// ```
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let without_fragment = href.split('#').next().unwrap_or_default();
        let (path, search) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        let query = form_urlencoded::parse(search.as_bytes())
            .find(|(key, _)| key == SEARCH_PARAM)
            .map(|(_, value)| value.into_owned());

        Self {
            path: normalize_path(path),
            query,
        }
    }

    /// Returns `true` if the URL carries a `q` parameter (even an empty one).
    #[must_use]
    pub const fn has_search(&self) -> bool {
        self.query.is_some()
    }

    /// Renders the location back into an href.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolodex::app::Location;
    ///
    /// assert_eq!(Location::root().href(), "/");
    /// assert_eq!(Location::root().with_query("a&b").href(), "/?q=a%26b");
    /// ```
    #[must_use]
    pub fn href(&self) -> String {
        match &self.query {
            None => self.path.clone(),
            Some(query) => {
                let search = form_urlencoded::Serializer::new(String::new())
                    .append_pair(SEARCH_PARAM, query)
                    .finish();
                format!("{}?{search}", self.path)
            }
        }
    }

    /// Returns `true` when `self.path` is `base` or lies below it.
    ///
    /// This is how navigation links decide whether they are active:
    /// `/contacts/1/edit` is within `/contacts/1`, `/contacts/10` is not.
    #[must_use]
    pub fn is_within(&self, base: &str) -> bool {
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            return self.path == "/";
        }
        self.path == base
            || self
                .path
                .strip_prefix(base)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Ensures a single leading slash and no trailing slash (except for `/`).
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_href_agree_on_encoding() {
        let location = Location::new("/contacts/1").with_query("Ada Lovelace");
        assert_eq!(location.href(), "/contacts/1?q=Ada+Lovelace");
        assert_eq!(Location::parse(&location.href()), location);
    }

    #[test]
    fn first_q_parameter_wins() {
        let location = Location::parse("/?x=1&q=first&q=second");
        assert_eq!(location.query.as_deref(), Some("first"));
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        assert_eq!(Location::parse("/contacts/1/").path, "/contacts/1");
        assert_eq!(Location::parse("").path, "/");
    }

    #[test]
    fn is_within_matches_nested_paths_only() {
        let edit = Location::new("/contacts/1/edit");
        assert!(edit.is_within("/contacts/1"));
        assert!(!edit.is_within("/contacts/10"));
        assert!(!Location::new("/contacts/10").is_within("/contacts/1"));
        assert!(Location::root().is_within("/"));
    }
}
