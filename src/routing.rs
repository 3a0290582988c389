use std::collections::HashMap;

use thiserror::Error;

/// Names a page handler without owning its behavior. The HTTP layer maps
/// each variant to a rendering function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PageHandler {
    Home,
    Blogs,
    Videos,
    Resources,
    IeltsModule,
    Contact,
    AuthPage,
}

/// One route declaration: a literal path pattern, the handler it dispatches
/// to, and the symbolic name used for reverse lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteEntry {
    pattern: &'static str,
    handler: PageHandler,
    name: &'static str,
}

impl RouteEntry {
    pub(crate) const fn new(
        pattern: &'static str,
        handler: PageHandler,
        name: &'static str,
    ) -> Self {
        Self { pattern, handler, name }
    }

    pub(crate) fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }
}

#[derive(Debug, Error)]
pub(crate) enum RouteTableError {
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),
    #[error("duplicate route pattern: {0:?}")]
    DuplicatePattern(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no route matches path: {0}")]
pub(crate) struct RouteNotFound(pub(crate) String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown route name: {0}")]
pub(crate) struct UnknownRouteName(pub(crate) String);

/// The site routes, in declaration order. Patterns keep the site's canonical
/// notation: empty string for the root, `segment/` otherwise.
const SITE_ROUTES: &[RouteEntry] = &[
    RouteEntry::new("", PageHandler::Home, "home"),
    RouteEntry::new("aitools/", PageHandler::Blogs, "aitools"),
    RouteEntry::new("blogs/", PageHandler::Blogs, "blogs"),
    RouteEntry::new("videos/", PageHandler::Videos, "videos"),
    RouteEntry::new("resources/", PageHandler::Resources, "resources"),
    RouteEntry::new("ielts-module/", PageHandler::IeltsModule, "ielts_module"),
    RouteEntry::new("contact/", PageHandler::Contact, "contact"),
    RouteEntry::new("auth/", PageHandler::AuthPage, "auth"),
];

/// Immutable lookup table built once at startup. The dispatch map and the
/// reverse map are both derived from the same entry list, so they cannot
/// drift apart. Lookups never mutate; concurrent reads need no locking.
#[derive(Debug, Clone)]
pub(crate) struct RouteTable {
    entries: Vec<RouteEntry>,
    by_pattern: HashMap<&'static str, PageHandler>,
    by_name: HashMap<&'static str, &'static str>,
}

impl RouteTable {
    pub(crate) fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut by_pattern = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for entry in &entries {
            if by_pattern.insert(normalize(entry.pattern), entry.handler).is_some() {
                return Err(RouteTableError::DuplicatePattern(entry.pattern));
            }
            if by_name.insert(entry.name, entry.pattern).is_some() {
                return Err(RouteTableError::DuplicateName(entry.name));
            }
        }

        Ok(Self { entries, by_pattern, by_name })
    }

    pub(crate) fn site() -> Result<Self, RouteTableError> {
        Self::new(SITE_ROUTES.to_vec())
    }

    /// Exact-match dispatch over the path component of a request. Leading
    /// and trailing slashes are insignificant.
    pub(crate) fn resolve(&self, path: &str) -> Result<PageHandler, RouteNotFound> {
        self.by_pattern
            .get(normalize(path))
            .copied()
            .ok_or_else(|| RouteNotFound(path.to_string()))
    }

    /// Returns the declared literal pattern for a symbolic name.
    pub(crate) fn reverse(&self, name: &str) -> Result<&'static str, UnknownRouteName> {
        self.by_name.get(name).copied().ok_or_else(|| UnknownRouteName(name.to_string()))
    }

    pub(crate) fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

fn normalize(path: &str) -> &str {
    path.trim_start_matches('/').trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_declared_paths_resolve() {
        let table = RouteTable::site().expect("site table");

        assert_eq!(table.resolve("").unwrap(), PageHandler::Home);
        assert_eq!(table.resolve("aitools/").unwrap(), PageHandler::Blogs);
        assert_eq!(table.resolve("blogs/").unwrap(), PageHandler::Blogs);
        assert_eq!(table.resolve("videos/").unwrap(), PageHandler::Videos);
        assert_eq!(table.resolve("resources/").unwrap(), PageHandler::Resources);
        assert_eq!(table.resolve("ielts-module/").unwrap(), PageHandler::IeltsModule);
        assert_eq!(table.resolve("contact/").unwrap(), PageHandler::Contact);
        assert_eq!(table.resolve("auth/").unwrap(), PageHandler::AuthPage);
    }

    #[test]
    fn resolve_ignores_leading_and_trailing_slashes() {
        let table = RouteTable::site().expect("site table");

        assert_eq!(table.resolve("/").unwrap(), PageHandler::Home);
        assert_eq!(table.resolve("/blogs/").unwrap(), PageHandler::Blogs);
        assert_eq!(table.resolve("/blogs").unwrap(), PageHandler::Blogs);
        assert_eq!(table.resolve("blogs").unwrap(), PageHandler::Blogs);
    }

    #[test]
    fn resolve_unknown_path_is_not_found() {
        let table = RouteTable::site().expect("site table");

        let err = table.resolve("/nonexistent").unwrap_err();
        assert_eq!(err, RouteNotFound("/nonexistent".to_string()));
    }

    #[test]
    fn reverse_returns_declared_patterns() {
        let table = RouteTable::site().expect("site table");

        assert_eq!(table.reverse("home").unwrap(), "");
        assert_eq!(table.reverse("blogs").unwrap(), "blogs/");
        assert_eq!(table.reverse("aitools").unwrap(), "aitools/");
        assert_eq!(table.reverse("ielts_module").unwrap(), "ielts-module/");
    }

    #[test]
    fn reverse_unknown_name_fails() {
        let table = RouteTable::site().expect("site table");

        let err = table.reverse("does_not_exist").unwrap_err();
        assert_eq!(err, UnknownRouteName("does_not_exist".to_string()));
    }

    #[test]
    fn lookups_are_idempotent() {
        let table = RouteTable::site().expect("site table");

        for _ in 0..3 {
            assert_eq!(table.resolve("videos/").unwrap(), PageHandler::Videos);
            assert_eq!(table.reverse("videos").unwrap(), "videos/");
        }
    }

    #[test]
    fn shared_handler_keeps_distinct_reverse_paths() {
        let table = RouteTable::site().expect("site table");

        assert_eq!(table.resolve("aitools/").unwrap(), table.resolve("blogs/").unwrap());
        assert_ne!(table.reverse("aitools").unwrap(), table.reverse("blogs").unwrap());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let entries = vec![
            RouteEntry::new("blogs/", PageHandler::Blogs, "blogs"),
            RouteEntry::new("videos/", PageHandler::Videos, "blogs"),
        ];

        let err = RouteTable::new(entries).unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicateName("blogs")));
    }

    #[test]
    fn duplicate_pattern_is_rejected_after_normalization() {
        let entries = vec![
            RouteEntry::new("blogs/", PageHandler::Blogs, "blogs"),
            RouteEntry::new("blogs", PageHandler::Videos, "blogs_bare"),
        ];

        let err = RouteTable::new(entries).unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicatePattern("blogs")));
    }

    #[test]
    fn site_table_has_unique_names_and_patterns() {
        let table = RouteTable::site().expect("site table");
        assert_eq!(table.entries().len(), 8);

        let mut names: Vec<_> = table.entries().iter().map(|entry| entry.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);

        let mut patterns: Vec<_> = table.entries().iter().map(|entry| entry.pattern()).collect();
        patterns.sort_unstable();
        patterns.dedup();
        assert_eq!(patterns.len(), 8);
    }
}
