//! HTTP Response
use bytes::Bytes;

use crate::{headers::HeaderTable, http::StatusCode};

pub mod write;

pub use write::{Defaults, Serializer};

/// HTTP Response.
///
/// Holds a status code, a case-insensitive [`HeaderTable`] and a body, rendered to HTTP/1.1 wire
/// bytes with [`to_bytes`][Response::to_bytes] or a configured [`Serializer`].
///
/// # Equality and Ordering
///
/// Two responses are equal when their bodies are byte-identical and their headers are the same
/// mapping, names compared exactly. Status code is ignored.
///
/// Ordering only compares the bodies lexicographically. It is not a meaningful ordering of
/// responses. When bodies are equal but headers differ, the responses are unordered, so both `<`
/// and `>` returns `false`.
///
/// ```rust
/// use rawres::{response::Response, http::StatusCode};
///
/// let mut res = Response::new(StatusCode::NOT_FOUND);
/// res.set_header("Content-Type", "text/plain");
/// res.set_body("missing");
///
/// let bytes = res.to_bytes();
/// assert!(bytes.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
/// assert!(bytes.ends_with(b"\r\n\r\nmissing"));
/// ```
#[derive(Clone, Default)]
pub struct Response {
    status: StatusCode,
    headers: HeaderTable,
    body: Bytes,
}

/// Constructor
impl Response {
    /// Create empty [`Response`] with given status code.
    #[inline]
    pub fn new<S: Into<StatusCode>>(status: S) -> Self {
        Self {
            status: status.into(),
            headers: HeaderTable::new(),
            body: Bytes::new(),
        }
    }

    /// Set status code and returns self.
    #[inline]
    pub fn with_status<S: Into<StatusCode>>(mut self, status: S) -> Self {
        self.set_status_code(status);
        self
    }

    /// Set a header and returns self.
    #[inline]
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.set_header(name, value);
        self
    }

    /// Set body and returns self.
    #[inline]
    pub fn with_body<B: Into<Bytes>>(mut self, body: B) -> Self {
        self.set_body(body);
        self
    }
}

impl Response {
    /// Returns the body bytes.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as [`Bytes`].
    #[inline]
    pub fn body_bytes(&self) -> &Bytes {
        &self.body
    }

    /// Replace the body.
    ///
    /// Text is stored as its UTF-8 bytes.
    #[inline]
    pub fn set_body<B: Into<Bytes>>(&mut self, body: B) {
        self.body = body.into();
    }

    /// Returns the status code.
    #[inline]
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Replace the status code, any value is accepted.
    #[inline]
    pub fn set_status_code<S: Into<StatusCode>>(&mut self, status: S) {
        self.status = status.into();
    }

    /// Returns header value with given name ignoring case, or empty string if absent.
    #[inline]
    pub fn header(&self, name: &str) -> &str {
        self.headers.get(name)
    }

    /// Returns `true` if header with given name is present, ignoring case.
    #[inline]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.has(name)
    }

    /// Set a header, see [`HeaderTable::set`].
    #[inline]
    pub fn set_header<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.headers.set(name, value);
    }

    /// Returns shared reference to [`HeaderTable`].
    #[inline]
    pub fn headers(&self) -> &HeaderTable {
        &self.headers
    }

    /// Returns mutable reference to [`HeaderTable`].
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderTable {
        &mut self.headers
    }

    /// Discard all headers and adopt the given mapping, see [`HeaderTable::replace_all`].
    #[inline]
    pub fn set_headers<I, K, V>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.replace_all(mapping);
    }

    /// Serialize into HTTP/1.1 wire bytes using default [`Serializer`].
    ///
    /// The `Date` header, unless set, reflects the time of the call, so two calls may differ in
    /// that header only.
    #[inline]
    pub fn to_bytes(&self) -> Bytes {
        Serializer::new().serialize(self)
    }
}

impl PartialEq for Response {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body && self.headers == other.headers
    }
}

impl Eq for Response {}

impl PartialOrd for Response {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering;

        match self.body.as_ref().cmp(other.body.as_ref()) {
            Ordering::Equal if self.headers != other.headers => None,
            ord => Some(ord),
        }
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

#[cfg(test)]
mod test;
