use std::time::Duration;

use tokio::io::AsyncRead;
use tokio::time::timeout;

use crate::http::connection::Connection;
use crate::http::request::RequestContext;

/// Size of the body chunk buffer.
pub const CHUNK_LEN: usize = 64;

/// How long a transfer may sit with zero bytes arriving before it is
/// abandoned.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// One step of a streaming body transfer, delivered to the upload sink.
#[derive(Debug)]
pub enum BodyEvent<'a> {
    /// The transfer is starting; `declared_len` is the client's
    /// `Content-Length` (0 when missing or unparsable).
    Start { declared_len: u64 },
    /// A chunk of body bytes arrived.
    Chunk(&'a [u8]),
    /// The transfer is over, whether complete, disconnected or timed out.
    /// Emitted exactly once per transfer.
    End,
}

/// Receiver of body transfer events, attached to an upload route when it is
/// registered.
///
/// The request context accompanies every event so the sink can consult the
/// path and captured headers of the request being drained.
pub trait UploadSink: Send + Sync {
    fn on_event(&self, req: &RequestContext, event: BodyEvent<'_>);
}

/// Drains a declared-length request body into `sink` in fixed-size chunks.
///
/// Bytes are pulled as they become available, up to [`CHUNK_LEN`] at a
/// time. If the connection yields nothing for [`IDLE_TIMEOUT`], the
/// transfer is abandoned and whatever was received is kept; no error
/// status is sent, since the 200 already went out. Returns the number of
/// bytes actually received.
pub async fn receive_body<S>(
    conn: &mut Connection<S>,
    ctx: &RequestContext,
    sink: &dyn UploadSink,
) -> u64
where
    S: AsyncRead + Unpin,
{
    let declared_len = ctx.content_length();
    sink.on_event(ctx, BodyEvent::Start { declared_len });

    let mut chunk = [0u8; CHUNK_LEN];
    let mut remaining = declared_len;
    let mut received = 0u64;

    while remaining > 0 && conn.is_open() {
        let want = remaining.min(CHUNK_LEN as u64) as usize;
        match timeout(IDLE_TIMEOUT, conn.read_some(&mut chunk[..want])).await {
            // Idle watchdog fired: abandon the transfer, keep what arrived.
            Err(_) => break,
            // Peer closed or transport loss.
            Ok(Ok(0)) | Ok(Err(_)) => break,
            Ok(Ok(n)) => {
                remaining -= n as u64;
                received += n as u64;
                sink.on_event(ctx, BodyEvent::Chunk(&chunk[..n]));
            }
        }
    }

    sink.on_event(ctx, BodyEvent::End);
    received
}
