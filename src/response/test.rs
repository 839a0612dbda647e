use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{
    headers::HeaderError,
    http::{FixedClock, StatusCode},
    response::{Defaults, Response, Serializer},
};

const NOW: u64 = 1475419451;
const DATE: &str = "Sun, 02 Oct 2016 14:44:11 GMT";

fn fixed() -> Serializer<FixedClock> {
    Serializer::new().with_clock(FixedClock(UNIX_EPOCH + Duration::from_secs(NOW)))
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn test_serialize_empty() {
    let res = Response::default();
    let bytes = fixed().serialize(&res);

    let expected = format!(
        "HTTP/1.1 200 OK\r\n\
        Date: {DATE}\r\n\
        Connection: close\r\n\
        Server: rawres/{}\r\n\
        Content-Type: application/json; charset=utf-8\r\n\
        Content-Length: 0\r\n\
        \r\n",
        env!("CARGO_PKG_VERSION"),
    );
    assert_eq!(lossy(&bytes), expected);
}

#[test]
fn test_serialize_user_headers() {
    let mut res = Response::new(StatusCode::CREATED);
    res.set_header("X-Request-Id", "abc");
    res.set_header("content-type", "text/plain");
    res.set_header("Content-Length", "999");
    res.set_body("hello");

    let bytes = fixed()
        .with_defaults(Defaults {
            server: "test".into(),
            ..Defaults::default()
        })
        .serialize(&res);

    let expected = format!(
        "HTTP/1.1 201 Created\r\n\
        Date: {DATE}\r\n\
        Connection: close\r\n\
        Server: test\r\n\
        X-Request-Id: abc\r\n\
        content-type: text/plain\r\n\
        Content-Length: 999\r\n\
        \r\n\
        hello",
    );
    assert_eq!(lossy(&bytes), expected);
    assert_eq!(lossy(&bytes).matches("Content-Length").count(), 1);
    assert_eq!(lossy(&bytes).to_ascii_lowercase().matches("content-type").count(), 1);
}

#[test]
fn test_serialize_all_defaults_overridden() {
    let mut res = Response::new(204);
    res.set_headers([
        ("date", "yesterday"),
        ("CONNECTION", "keep-alive"),
        ("server", "custom"),
        ("Content-Type", "text/html"),
        ("content-length", "0"),
    ]);

    let bytes = fixed().serialize(&res);
    assert_eq!(
        lossy(&bytes),
        "HTTP/1.1 204 No Content\r\n\
        date: yesterday\r\n\
        CONNECTION: keep-alive\r\n\
        server: custom\r\n\
        Content-Type: text/html\r\n\
        content-length: 0\r\n\
        \r\n"
    );
}

#[test]
fn test_status_line() {
    let res = Response::new(StatusCode::NOT_FOUND);
    assert!(fixed().serialize(&res).starts_with(b"HTTP/1.1 404 Not Found\r\n"));

    let res = Response::new(799);
    assert!(fixed().serialize(&res).starts_with(b"HTTP/1.1 799 \r\n"));

    let res = Response::new(-7);
    assert!(fixed().serialize(&res).starts_with(b"HTTP/1.1 -7 \r\n"));
}

#[test]
fn test_content_length_tracks_body() {
    let mut res = Response::default();
    res.set_body(vec![0u8; 1024]);
    let bytes = fixed().serialize(&res);
    assert!(lossy(&bytes).contains("\r\nContent-Length: 1024\r\n"));

    res.set_body(&b"abc"[..]);
    let bytes = fixed().serialize(&res);
    assert!(lossy(&bytes).contains("\r\nContent-Length: 3\r\n"));
    assert!(bytes.ends_with(b"\r\n\r\nabc"));
}

#[test]
fn test_serialize_binary_body() {
    let body = vec![0u8, 0xFF, b'\r', b'\n', 0x80];
    let res = Response::default().with_body(body.clone());
    let bytes = fixed().serialize(&res);
    assert!(bytes.ends_with(&body));
    assert!(lossy(&bytes).contains("\r\nContent-Length: 5\r\n"));
}

#[test]
fn test_serialize_idempotent() {
    let res = Response::new(StatusCode::OK)
        .with_header("X-A", "1")
        .with_body("body");
    let ser = fixed();
    let a = ser.serialize(&res);
    let b = ser.serialize(&res);
    assert_eq!(a, b);
    assert_eq!(res.headers().len(), 1);
    assert_eq!(res.body(), b"body");
}

#[test]
fn test_serialize_system_clock() {
    let a = Response::default().to_bytes();
    let text = lossy(&a);
    let date = text
        .lines()
        .find_map(|line| line.strip_prefix("Date: "))
        .unwrap();
    assert_eq!(date.len(), 29);
    assert!(date.ends_with(" GMT"));
}

#[test]
fn test_clock_fn() {
    let ser = Serializer::new().with_clock(|| UNIX_EPOCH);
    let bytes = ser.serialize(&Response::default());
    assert!(lossy(&bytes).contains("\r\nDate: Thu, 01 Jan 1970 00:00:00 GMT\r\n"));
}

#[test]
fn test_write_into_buffer() {
    let res = Response::default().with_body("x");
    let mut buf = Vec::new();
    fixed().write(&res, &mut buf);
    assert_eq!(&buf[..], &fixed().serialize(&res)[..]);
}

#[test]
fn test_round_trip() {
    let mut res = Response::new(StatusCode::NOT_FOUND);
    res.set_header("X-Trace", "t-1");
    res.set_header("Content-Type", "text/plain");
    res.set_body("not here");

    let bytes = fixed().serialize(&res);

    let mut headers = [httparse::EMPTY_HEADER; 16];
    let mut parsed = httparse::Response::new(&mut headers);
    let httparse::Status::Complete(offset) = parsed.parse(&bytes).unwrap() else {
        panic!("incomplete response");
    };

    assert_eq!(parsed.version, Some(1));
    assert_eq!(parsed.code, Some(404));
    assert_eq!(parsed.reason, Some("Not Found"));
    assert_eq!(&bytes[offset..], res.body());

    for (name, value) in res.headers() {
        let found = parsed
            .headers
            .iter()
            .filter(|h| h.name.eq_ignore_ascii_case(name))
            .collect::<Vec<_>>();
        assert_eq!(found.len(), 1, "header {name}");
        assert_eq!(found[0].value, value.as_bytes());
    }
    let len = parsed
        .headers
        .iter()
        .find(|h| h.name == "Content-Length")
        .unwrap();
    assert_eq!(len.value, b"8");
}

#[test]
fn test_strict() {
    let mut res = Response::default();
    res.set_header("X-Split", "a\r\nInjected: 1");

    // permissive by default
    let bytes = fixed().try_serialize(&res).unwrap();
    assert!(lossy(&bytes).contains("X-Split: a\r\nInjected: 1\r\n"));

    let err = fixed().strict(true).try_serialize(&res).unwrap_err();
    assert_eq!(err, HeaderError::InvalidValue { name: "X-Split".into() });

    res.set_headers([("Bad Name", "v")]);
    let err = fixed().strict(true).try_serialize(&res).unwrap_err();
    assert_eq!(err, HeaderError::InvalidName { name: "Bad Name".into() });

    res.set_headers([("X-Ok", "fine")]);
    let ser = fixed().strict(true);
    assert!(ser.is_strict());
    assert_eq!(ser.try_serialize(&res).unwrap(), ser.serialize(&res));

    let ser = fixed().strict(true).with_defaults(Defaults {
        server: "evil\r\n".into(),
        ..Defaults::default()
    });
    assert_eq!(
        ser.try_serialize(&Response::default()),
        Err(HeaderError::InvalidValue { name: "Server".into() })
    );
}

// ===== Entity =====

#[test]
fn test_accessors() {
    let mut res = Response::default();
    assert_eq!(res.status_code(), StatusCode::OK);
    assert!(res.body().is_empty());
    assert!(res.headers().is_empty());

    res.set_status_code(500);
    res.set_body(String::from("text"));
    res.set_header("Content-Type", "text/plain");
    res.set_header("content-type", "text/html");

    assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body(), b"text");
    assert_eq!(res.header("CONTENT-TYPE"), "text/html");
    assert_eq!(res.header("missing"), "");
    assert!(res.has_header("content-type"));
    assert_eq!(res.headers().len(), 1);

    res.headers_mut().remove("Content-Type");
    assert!(!res.has_header("content-type"));
}

#[test]
fn test_eq() {
    let a = Response::new(200).with_header("X", "1").with_body("b");
    let b = Response::new(500).with_header("X", "1").with_body("b");
    let c = Response::new(200).with_header("X", "1").with_body("c");
    let d = Response::new(200).with_header("x", "1").with_body("b");

    // status is ignored
    assert_eq!(a, b);
    assert_ne!(a, c);
    // names compared exactly
    assert_ne!(a, d);
}

#[test]
fn test_ord() {
    let a = Response::default().with_body("abc");
    let b = Response::default().with_header("X", "1").with_body("abd");
    assert!(a < b);
    assert!(b > a);

    let c = Response::default().with_header("X", "1").with_body("abc");
    assert!(!(a < c));
    assert!(!(a > c));
    assert_eq!(a.partial_cmp(&c), None);

    let d = Response::new(404).with_body("abc");
    assert_eq!(a.partial_cmp(&d), Some(std::cmp::Ordering::Equal));
}

#[test]
fn test_copy_independent() {
    let original = Response::default().with_header("X", "1").with_body("original");
    let mut copy = original.clone();
    copy.set_body("changed");
    copy.set_header("x", "2");
    copy.set_status_code(StatusCode::GONE);

    assert_eq!(original.body(), b"original");
    assert_eq!(original.header("X"), "1");
    assert_eq!(original.status_code(), StatusCode::OK);
    assert_eq!(copy.body(), b"changed");
}

#[test]
fn test_debug() {
    let res = Response::new(404).with_header("X", "1").with_body("abc");
    assert_eq!(
        format!("{res:?}"),
        r#"Response { status: StatusCode(404), headers: {"X": "1"}, body_len: 3 }"#
    );
}

#[test]
fn test_date_override_not_clock() {
    let now = SystemTime::now();
    let res = Response::default().with_header("Date", "fixed");
    let a = Serializer::new().with_clock(FixedClock(now)).serialize(&res);
    let b = Serializer::new()
        .with_clock(FixedClock(now + Duration::from_secs(3600)))
        .serialize(&res);
    assert_eq!(a, b);
}
