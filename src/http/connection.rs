use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::buffer::ScratchBuf;

/// Outcome of a bounded line read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// The newline arrived within the buffer bound.
    Complete,
    /// The buffer filled up before a newline was seen.
    TooLong,
    /// The peer went away before the line ended.
    Disconnected,
}

/// Byte-oriented view of one accepted connection.
///
/// This is the transport seam of the crate: the processor and the parsers
/// consume single bytes and emit writes through it, and anything that is
/// `AsyncRead + AsyncWrite` can sit underneath: a TCP stream in the binary,
/// an in-memory duplex stream in tests.
pub struct Connection<S> {
    stream: S,
    open: bool,
}

impl<S> Connection<S> {
    pub fn new(stream: S) -> Self {
        Self { stream, open: true }
    }

    /// False once end-of-stream or an I/O error has been observed.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl<S: AsyncRead + Unpin> Connection<S> {
    /// Reads the next byte. `Ok(None)` once the peer has closed its side.
    pub async fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if !self.open {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match self.stream.read(&mut byte).await {
            Ok(0) => {
                self.open = false;
                Ok(None)
            }
            Ok(_) => Ok(Some(byte[0])),
            Err(e) => {
                self.open = false;
                Err(e)
            }
        }
    }

    /// Reads whatever is currently available into `buf`, up to its length.
    /// Returns 0 once the peer has closed its side.
    pub async fn read_some(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.open || buf.is_empty() {
            return Ok(0);
        }
        match self.stream.read(buf).await {
            Ok(0) => {
                self.open = false;
                Ok(0)
            }
            Ok(n) => Ok(n),
            Err(e) => {
                self.open = false;
                Err(e)
            }
        }
    }

    /// Reads one line into `scratch`, bounded by its capacity.
    ///
    /// Every byte up to but excluding the terminating `\n` is stored; a
    /// trailing `\r` stays in the buffer and is treated as field whitespace
    /// by the caller.
    pub async fn read_line(&mut self, scratch: &mut ScratchBuf) -> io::Result<LineStatus> {
        scratch.clear();
        loop {
            match self.read_byte().await? {
                None => return Ok(LineStatus::Disconnected),
                Some(b'\n') => return Ok(LineStatus::Complete),
                Some(ch) => {
                    if !scratch.push(ch) {
                        return Ok(LineStatus::TooLong);
                    }
                }
            }
        }
    }
}

impl<S: AsyncWrite + Unpin> Connection<S> {
    pub async fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self.stream.write_all(bytes).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.open = false;
                Err(e)
            }
        }
    }

    /// Flushes and shuts down the write side, signalling end-of-response.
    pub async fn shutdown(&mut self) -> io::Result<()> {
        self.open = false;
        self.stream.shutdown().await
    }
}
