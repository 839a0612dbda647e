//! HTTP/1.1 Response Serialization
//!
//! Build a [`Response`][response::Response] value, then render it into the exact bytes of an
//! HTTP/1.1 response: status line, default headers the caller did not set, caller headers, blank
//! line and body.
//!
//! ```rust
//! use rawres::response::Response;
//!
//! let mut res = Response::default();
//! res.set_header("content-type", "text/plain");
//! res.set_body("Hello");
//!
//! let bytes = res.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\nDate: "));
//! assert!(bytes.ends_with(b"content-type: text/plain\r\n\r\nHello"));
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod http;
pub mod headers;
pub mod response;

#[cfg(feature = "tokio")]
pub mod rt;

pub use response::{Response, Serializer};
