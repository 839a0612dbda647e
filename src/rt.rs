//! Transport hand-off.
use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::{
    http::Clock,
    log::{debug, warning},
    response::{Response, Serializer},
};

/// Serialize response once and write all of it into `io`.
///
/// Returns the number of bytes written. Connection management is left to the caller.
///
/// # Errors
///
/// Returns error from the underlying writer.
pub async fn write_response<C, W>(
    res: &Response,
    serializer: &Serializer<C>,
    io: &mut W,
) -> io::Result<usize>
where
    C: Clock,
    W: AsyncWrite + Unpin + ?Sized,
{
    let bytes = serializer.serialize(res);

    if let Err(err) = io.write_all(&bytes).await {
        warning!("failed to write response: {err}");
        return Err(err);
    }
    io.flush().await?;

    debug!("wrote {} bytes response", bytes.len());
    Ok(bytes.len())
}

#[cfg(test)]
mod test {
    use std::time::UNIX_EPOCH;

    use super::write_response;
    use crate::{
        http::{FixedClock, StatusCode},
        response::{Response, Serializer},
    };

    #[tokio::test(flavor = "current_thread")]
    async fn test_write_response() {
        let _ = env_logger::builder().is_test(true).try_init();

        let res = Response::new(StatusCode::ACCEPTED).with_body("queued");
        let ser = Serializer::new().with_clock(FixedClock(UNIX_EPOCH));

        let mut io = Vec::new();
        let written = write_response(&res, &ser, &mut io).await.unwrap();

        assert_eq!(written, io.len());
        assert_eq!(&io[..], &ser.serialize(&res)[..]);
        assert!(io.starts_with(b"HTTP/1.1 202 Accepted\r\n"));
    }
}
