use tokio::io::AsyncReadExt;

use wicket::http::buffer::ScratchBuf;
use wicket::http::connection::Connection;
use wicket::http::mime;
use wicket::http::response::StatusCode;
use wicket::http::writer::Responder;
use wicket::storage::{FsStorage, Storage};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::UriTooLong.as_u16(), 414);
    assert_eq!(StatusCode::ExpectationFailed.as_u16(), 417);
}

/// Runs `write` against an in-memory connection and returns everything the
/// client side would see.
async fn capture<F>(write: F) -> Vec<u8>
where
    F: AsyncFnOnce(&mut Connection<tokio::io::DuplexStream>),
{
    let (mut client, server) = tokio::io::duplex(4096);
    let mut conn = Connection::new(server);
    write(&mut conn).await;
    drop(conn);

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    out
}

#[tokio::test]
async fn test_ok_status_line_leaves_headers_open() {
    let out = capture(async |conn| {
        Responder::new(conn)
            .send_status(StatusCode::Ok)
            .await
            .unwrap();
    })
    .await;

    assert_eq!(out, b"HTTP/1.1 200 OK\r\n");
}

#[tokio::test]
async fn test_error_status_terminates_headers_immediately() {
    let out = capture(async |conn| {
        Responder::new(conn)
            .send_status(StatusCode::NotFound)
            .await
            .unwrap();
    })
    .await;

    assert_eq!(out, b"HTTP/1.1 404 OK\r\n\r\n");
}

#[tokio::test]
async fn test_reason_phrase_is_always_ok() {
    for status in [
        StatusCode::NotFound,
        StatusCode::UriTooLong,
        StatusCode::ExpectationFailed,
    ] {
        let out = capture(async move |conn| {
            Responder::new(conn).send_status(status).await.unwrap();
        })
        .await;

        let text = String::from_utf8(out).unwrap();
        let expected = format!("HTTP/1.1 {} OK\r\n\r\n", status.as_u16());
        assert_eq!(text, expected);
    }
}

#[tokio::test]
async fn test_content_type_from_mime_table() {
    let out = capture(async |conn| {
        let mut rsp = Responder::new(conn);
        rsp.send_content_type(mime::from_filename("A.JPG"))
            .await
            .unwrap();
    })
    .await;

    assert_eq!(out, b"Content-Type: image/jpeg\r\n");
}

#[tokio::test]
async fn test_content_type_from_arbitrary_string() {
    let out = capture(async |conn| {
        let mut rsp = Responder::new(conn);
        rsp.send_content_type_str("application/octet-stream")
            .await
            .unwrap();
    })
    .await;

    assert_eq!(out, b"Content-Type: application/octet-stream\r\n");
}

#[tokio::test]
async fn test_full_response_has_one_blank_line_before_body() {
    let out = capture(async |conn| {
        let mut rsp = Responder::new(conn);
        rsp.send_status(StatusCode::Ok).await.unwrap();
        rsp.send_content_type_str("text/plain").await.unwrap();
        rsp.end_headers().await.unwrap();
        rsp.write(b"hello").await.unwrap();
    })
    .await;

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello"
    );
}

#[tokio::test]
async fn test_send_file_streams_whole_file_in_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FsStorage::new(dir.path());
    // Larger than the scratch buffer, so several chunks are needed.
    let content: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(dir.path().join("DATA.BIN"), &content).unwrap();

    let mut file = storage.open_read("DATA.BIN").unwrap();
    let out = capture(async |conn| {
        let mut scratch = ScratchBuf::new();
        Responder::new(conn)
            .send_file(file.as_mut(), &mut scratch)
            .await
            .unwrap();
    })
    .await;

    assert_eq!(out, content);
}
