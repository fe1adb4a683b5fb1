use std::io;

use tokio::io::AsyncWrite;

use crate::http::buffer::ScratchBuf;
use crate::http::connection::Connection;
use crate::http::mime::MimeType;
use crate::http::response::StatusCode;
use crate::storage::FileRead;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Writes the wire-level response protocol onto a connection.
///
/// Handlers receive a `Responder` as their response interface. The protocol
/// is fixed: one status line, zero or more header lines, exactly one blank
/// line, then any body bytes.
pub struct Responder<'a, S> {
    conn: &'a mut Connection<S>,
}

impl<'a, S: AsyncWrite + Unpin> Responder<'a, S> {
    pub fn new(conn: &'a mut Connection<S>) -> Self {
        Self { conn }
    }

    /// Sends the status line for `status`.
    ///
    /// The reason phrase is literally `OK` for every code, 200 or not. For
    /// any code other than 200 the header block is terminated immediately,
    /// with no body to follow.
    pub async fn send_status(&mut self, status: StatusCode) -> io::Result<()> {
        let line = format!("{} {} OK\r\n", HTTP_VERSION, status.as_u16());
        self.conn.write_all(line.as_bytes()).await?;
        if status != StatusCode::Ok {
            self.end_headers().await?;
        }
        Ok(())
    }

    /// Sends a `Content-Type` header from a resolved MIME table entry.
    pub async fn send_content_type(&mut self, mime_type: MimeType) -> io::Result<()> {
        self.send_content_type_str(mime_type.as_str()).await
    }

    /// Sends a `Content-Type` header from an arbitrary string.
    pub async fn send_content_type_str(&mut self, content_type: &str) -> io::Result<()> {
        self.conn.write_all(b"Content-Type: ").await?;
        self.conn.write_all(content_type.as_bytes()).await?;
        self.conn.write_all(b"\r\n").await
    }

    /// Terminates the header block. Must be sent exactly once before any
    /// body bytes.
    pub async fn end_headers(&mut self) -> io::Result<()> {
        self.conn.write_all(b"\r\n").await
    }

    /// Writes body bytes directly to the client.
    pub async fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.conn.write_all(bytes).await
    }

    /// Streams the contents of `file` to the client in chunks through the
    /// scratch buffer, stopping early if the client goes away.
    pub async fn send_file(
        &mut self,
        file: &mut dyn FileRead,
        scratch: &mut ScratchBuf,
    ) -> io::Result<()> {
        loop {
            let chunk = scratch.space();
            let n = file.read_chunk(chunk)?;
            if n == 0 {
                return Ok(());
            }
            if !self.conn.is_open() {
                return Ok(());
            }
            self.conn.write_all(&chunk[..n]).await?;
        }
    }
}
