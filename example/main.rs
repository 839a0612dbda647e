use std::io;
use rawres::{
    Response, Serializer,
    http::StatusCode,
    response::Defaults,
    rt::write_response,
};
use tokio::{
    io::AsyncReadExt,
    net::{TcpListener, TcpStream},
};

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let io = TcpListener::bind("0.0.0.0:3000").await?;
    log::info!("listening on {}", io.local_addr()?);

    loop {
        let (stream, addr) = io.accept().await?;
        tokio::spawn(async move {
            if let Err(err) = handle(stream).await {
                log::error!("{addr}: {err}");
            }
        });
    }
}

async fn handle(mut stream: TcpStream) -> io::Result<()> {
    let mut buf = [0u8; 4096];
    let read = stream.read(&mut buf).await?;
    let head = String::from_utf8_lossy(&buf[..read]);
    let reqline = head.lines().next().unwrap_or_default();
    println!("> {reqline}");

    let res = match reqline.split(' ').nth(1) {
        Some("/") => Response::new(StatusCode::OK).with_body(r#"{"hello":"world"}"#),
        Some("/text") => Response::new(StatusCode::OK)
            .with_header("Content-Type", "text/plain")
            .with_body("Hell"),
        _ => Response::new(StatusCode::NOT_FOUND).with_body(r#"{"error":"not found"}"#),
    };

    let serializer = Serializer::new().with_defaults(Defaults {
        server: "rawres-example".into(),
        ..Defaults::default()
    });
    write_response(&res, &serializer, &mut stream).await?;
    Ok(())
}
