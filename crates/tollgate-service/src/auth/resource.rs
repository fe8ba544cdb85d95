//! Resource paths for authorization.
//!
//! Resources are absolute, slash-delimited paths. A policy entry for a path
//! ending in `/` covers everything below it; an entry without the trailing
//! separator only covers that exact resource.

use std::iter::FusedIterator;

use tollgate_core::constants::PATH_SEPARATOR;

/// Returns `true` if `resource` starts at the namespace root.
#[must_use]
pub fn is_absolute(resource: &str) -> bool {
    resource.starts_with(PATH_SEPARATOR)
}

/// Returns the next shorter candidate for the ancestor walk.
///
/// One trailing separator is stripped, then the path is cut after its last
/// remaining separator. The parent of `/` is the empty string.
///
/// ## Examples
///
/// ```
/// use tollgate_service::auth::parent;
///
/// assert_eq!(parent("/a/b/c"), "/a/b/");
/// assert_eq!(parent("/a/b/"), "/a/");
/// assert_eq!(parent("/a"), "/");
/// assert_eq!(parent("/"), "");
/// ```
#[must_use]
pub fn parent(resource: &str) -> &str {
    let trimmed = resource.strip_suffix(PATH_SEPARATOR).unwrap_or(resource);
    trimmed
        .rfind(PATH_SEPARATOR)
        .map_or("", |idx| &trimmed[..=idx])
}

/// Iterator over a resource and its ancestors, most specific first.
///
/// Every item borrows from the original resource string. For `/a/b/c` the
/// items are `/a/b/c`, `/a/b/`, `/a/` and `/`. The trailing-separator form
/// `/a/b/c/` is never produced.
#[derive(Debug, Clone)]
pub struct ResourceAncestors<'a> {
    next: &'a str,
}

impl<'a> ResourceAncestors<'a> {
    #[must_use]
    pub const fn new(resource: &'a str) -> Self {
        Self { next: resource }
    }
}

impl<'a> Iterator for ResourceAncestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.next.is_empty() {
            return None;
        }
        let current = self.next;
        self.next = parent(current);
        Some(current)
    }
}

impl FusedIterator for ResourceAncestors<'_> {}
