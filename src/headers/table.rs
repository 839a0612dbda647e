use super::{Iter, matches::name_eq};

/// Case-insensitive HTTP header table.
///
/// Header names are compared ignoring ASCII case, but the casing of the first inserted name is
/// kept for output. Entries are enumerated in insertion order.
///
/// ```rust
/// use rawres::headers::HeaderTable;
///
/// let mut headers = HeaderTable::new();
/// headers.set("Content-Type", "text/html");
/// headers.set("content-type", "text/plain");
///
/// assert_eq!(headers.len(), 1);
/// assert_eq!(headers.get("CONTENT-TYPE"), "text/plain");
/// assert_eq!(headers.iter().next(), Some(("Content-Type", "text/plain")));
/// ```
#[derive(Clone, Default)]
pub struct HeaderTable {
    entries: Vec<(String, String)>,
}

impl HeaderTable {
    /// Create new empty [`HeaderTable`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create new empty [`HeaderTable`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns headers length.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(key, _)| name_eq(key.as_bytes(), name.as_bytes()))
    }
}

// ===== Lookup =====

impl HeaderTable {
    /// Returns `true` if the table contains a header with given name, ignoring case.
    #[inline]
    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the header value with given name, ignoring case.
    ///
    /// Returns empty string if the header is not present, use [`has`][HeaderTable::has] or
    /// [`try_get`][HeaderTable::try_get] to tell absent and empty value apart.
    #[inline]
    pub fn get(&self, name: &str) -> &str {
        self.try_get(name).unwrap_or_default()
    }

    /// Returns the header value with given name, ignoring case.
    #[inline]
    pub fn try_get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Returns all headers as name and value pairs, in insertion order.
    #[inline]
    pub fn all(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Returns an iterator over headers as name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.entries)
    }

    /// Returns an iterator over header names, with their stored casing.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

// ===== Mutation =====

impl HeaderTable {
    /// Set a header value.
    ///
    /// If a header with the same name, ignoring case, is present, its value is replaced while the
    /// stored name keeps its original casing. Otherwise the header is appended.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Removes a header, ignoring case, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    /// Discard all headers and adopt the given mapping verbatim.
    ///
    /// No case folding is performed, the caller is responsible for providing names that are
    /// unique ignoring case. Exact duplicate names keep the last value.
    pub fn replace_all<I, K, V>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.clear();
        for (name, value) in mapping {
            let (name, value) = (name.into(), value.into());
            match self.entries.iter_mut().find(|(key, _)| *key == name) {
                Some(entry) => entry.1 = value,
                None => self.entries.push((name, value)),
            }
        }
    }

    /// Removes all headers.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// ===== Traits =====

/// Mapping equality, names are compared exactly and order is ignored.
impl PartialEq for HeaderTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(name, value)| {
                other
                    .entries
                    .iter()
                    .any(|(oname, ovalue)| oname == name && ovalue == value)
            })
    }
}

impl Eq for HeaderTable {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for HeaderTable {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl std::fmt::Debug for HeaderTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
