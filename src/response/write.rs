use std::borrow::Cow;

use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    headers::{HeaderError, validate},
    http::{Clock, SystemClock, httpdate},
    log::{debug, trace, warning},
    response::Response,
};

/// Default `Server` header value.
pub const DEFAULT_SERVER: &str = concat!("rawres/", env!("CARGO_PKG_VERSION"));

/// Default `Content-Type` header value.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Default `Connection` header value.
pub const DEFAULT_CONNECTION: &str = "close";

const DATE: &str = "Date";
const CONNECTION: &str = "Connection";
const SERVER: &str = "Server";
const CONTENT_TYPE: &str = "Content-Type";
const CONTENT_LENGTH: &str = "Content-Length";

/// Values of the default headers written when the response does not set them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Defaults {
    /// `Server` header value.
    pub server: Cow<'static, str>,
    /// `Content-Type` header value.
    pub content_type: Cow<'static, str>,
    /// `Connection` header value.
    pub connection: Cow<'static, str>,
}

impl Default for Defaults {
    #[inline]
    fn default() -> Self {
        Self {
            server: Cow::Borrowed(DEFAULT_SERVER),
            content_type: Cow::Borrowed(DEFAULT_CONTENT_TYPE),
            connection: Cow::Borrowed(DEFAULT_CONNECTION),
        }
    }
}

/// HTTP/1.1 response serializer.
///
/// Writes, in order:
///
/// 1. status line, `HTTP/1.1 <code> <reason>`
/// 2. `Date`, `Connection`, `Server`, `Content-Type` and `Content-Length`, each only when the
///    response does not set it, ignoring case
/// 3. response headers in insertion order
/// 4. blank line
/// 5. body
///
/// Serialization is permissive, names and values are written verbatim. Use
/// [`strict`][Serializer::strict] with [`try_serialize`][Serializer::try_serialize] to reject
/// headers that would produce malformed output.
#[derive(Clone, Debug, Default)]
pub struct Serializer<C = SystemClock> {
    defaults: Defaults,
    clock: C,
    strict: bool,
}

impl Serializer {
    /// Create [`Serializer`] with default header values and system clock.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> Serializer<C> {
    /// Replace the clock used for the `Date` header.
    #[inline]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Serializer<C2> {
        Serializer {
            defaults: self.defaults,
            clock,
            strict: self.strict,
        }
    }

    /// Replace default header values.
    #[inline]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Enable header validation in [`try_serialize`][Serializer::try_serialize].
    #[inline]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns default header values.
    #[inline]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Returns `true` if header validation is enabled.
    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl<C: Clock> Serializer<C> {
    /// Serialize response into wire bytes.
    ///
    /// This function never fails.
    pub fn serialize(&self, res: &Response) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.estimate_len(res));
        self.write(res, &mut buf);
        trace!("serialized {} response, {} bytes", res.status_code().status(), buf.len());
        buf.freeze()
    }

    /// Serialize response into wire bytes, validating headers when strict.
    ///
    /// # Errors
    ///
    /// In strict mode, returns error if any header name is not a valid token or any header value
    /// contains control character. Otherwise this function never fails.
    pub fn try_serialize(&self, res: &Response) -> Result<Bytes, HeaderError> {
        if self.strict {
            self.validate(res)?;
        }
        Ok(self.serialize(res))
    }

    /// Write the serialized response into given buffer.
    pub fn write<B: BufMut>(&self, res: &Response, mut buf: B) {
        write_status_line(res, &mut buf);
        self.write_default_headers(res, &mut buf);

        for (name, value) in res.headers() {
            write_header(name, value.as_bytes(), &mut buf);
        }

        buf.put_slice(b"\r\n");
        buf.put_slice(res.body());
    }

    fn write_default_headers<B: BufMut>(&self, res: &Response, buf: &mut B) {
        let headers = res.headers();

        if headers.has(DATE) {
            debug!("`{DATE}` header overridden");
        } else {
            write_header(DATE, &httpdate(self.clock.now()), buf);
        }

        for (name, value) in [
            (CONNECTION, &self.defaults.connection),
            (SERVER, &self.defaults.server),
            (CONTENT_TYPE, &self.defaults.content_type),
        ] {
            if headers.has(name) {
                debug!("`{name}` header overridden");
            } else {
                write_header(name, value.as_bytes(), buf);
            }
        }

        if headers.has(CONTENT_LENGTH) {
            debug!("`{CONTENT_LENGTH}` header overridden");
        } else {
            let mut len = itoa::Buffer::new();
            write_header(CONTENT_LENGTH, len.format(res.body().len()).as_bytes(), buf);
        }
    }

    fn validate(&self, res: &Response) -> Result<(), HeaderError> {
        let defaults = [
            (CONNECTION, &*self.defaults.connection),
            (SERVER, &*self.defaults.server),
            (CONTENT_TYPE, &*self.defaults.content_type),
        ];
        defaults
            .into_iter()
            .chain(res.headers().iter())
            .try_for_each(|(name, value)| validate(name, value))
            .inspect_err(|_err| {
                warning!("rejected response header: {_err}");
            })
    }

    fn estimate_len(&self, res: &Response) -> usize {
        const STATUS_LINE: usize = 64;
        const DATE_HEADER: usize = DATE.len() + 2 + 29 + 2;
        const CONTENT_LENGTH_HEADER: usize =
            CONTENT_LENGTH.len() + 2 + <usize as itoa::Integer>::MAX_STR_LEN + 2;

        let defaults = &self.defaults;
        let headers: usize = res
            .headers()
            .iter()
            .map(|(name, value)| name.len() + value.len() + 4)
            .sum();

        STATUS_LINE
            + DATE_HEADER
            + CONTENT_LENGTH_HEADER
            + defaults.connection.len()
            + defaults.server.len()
            + defaults.content_type.len()
            + 64
            + headers
            + 2
            + res.body().len()
    }
}

fn write_status_line<B: BufMut>(res: &Response, buf: &mut B) {
    let status = res.status_code();
    buf.put_slice(b"HTTP/1.1 ");
    buf.put_slice(itoa::Buffer::new().format(status.status()).as_bytes());
    buf.put_slice(b" ");
    buf.put_slice(status.reason_phrase().as_bytes());
    buf.put_slice(b"\r\n");
}

fn write_header<B: BufMut>(name: &str, value: &[u8], buf: &mut B) {
    buf.put_slice(name.as_bytes());
    buf.put_slice(b": ");
    buf.put_slice(value);
    buf.put_slice(b"\r\n");
}
