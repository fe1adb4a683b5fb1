use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::http::body::receive_body;
use crate::http::buffer::ScratchBuf;
use crate::http::connection::{Connection, LineStatus};
use crate::http::fields::get_field;
use crate::http::headers::{parse_headers, HeaderSet};
use crate::http::mime;
use crate::http::request::{Method, RequestContext};
use crate::http::response::StatusCode;
use crate::http::routes::{Route, RouteHandler, RouteTable};
use crate::http::url::file_from_path;
use crate::http::writer::Responder;
use crate::storage::Storage;

/// The request processor: parses one request off an accepted connection,
/// dispatches it through the route table and lets the matched handler
/// answer.
///
/// Constructed once with the ordered route table, the set of header names
/// to capture and the storage capability, then driven by the accept loop,
/// one connection at a time, each handled end to end.
pub struct Processor {
    routes: RouteTable,
    filter: Arc<HeaderSet>,
    storage: Arc<dyn Storage>,
}

impl Processor {
    pub fn new(routes: RouteTable, filter: HeaderSet, storage: Arc<dyn Storage>) -> Self {
        Self {
            routes,
            filter: Arc::new(filter),
            storage,
        }
    }

    /// Handles one request on `stream` to completion.
    ///
    /// The scratch buffer lives inside this call and is lent to the line
    /// reader, the header machine and the file sender in turn; the request
    /// context with its captured values is dropped on every exit path.
    pub async fn process<S>(&self, stream: S) -> anyhow::Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut conn = Connection::new(stream);
        let mut scratch = ScratchBuf::new();

        match conn.read_line(&mut scratch).await? {
            LineStatus::Disconnected => return Ok(()),
            LineStatus::TooLong => {
                warn!("Request line exceeded buffer");
                Responder::new(&mut conn)
                    .send_status(StatusCode::UriTooLong)
                    .await?;
                conn.shutdown().await?;
                return Ok(());
            }
            LineStatus::Complete => {}
        }
        if scratch.is_empty() {
            // Stray blank line; nothing to answer.
            return Ok(());
        }

        let line = scratch.text().into_owned();
        let method = Method::from_token(get_field(&line, 0).unwrap_or(""));
        let path = get_field(&line, 1).unwrap_or("").to_string();
        let mut ctx = RequestContext::new(method, path, self.filter.clone());
        info!("{} {}", ctx.method().as_str(), ctx.path());

        if let Err(e) = parse_headers(&mut conn, &mut scratch, &mut ctx).await {
            warn!("Header parse failed: {:?}", e);
            // A half-closed client can still read the status; a dead one
            // fails the write, which there is no point reporting.
            let _ = Responder::new(&mut conn)
                .send_status(StatusCode::ExpectationFailed)
                .await;
            let _ = conn.shutdown().await;
            return Ok(());
        }

        let close = match self.routes.find(ctx.path(), ctx.method()) {
            Some(route) => {
                debug!("Matched route {}", route.pattern());
                self.dispatch(route, &ctx, &mut conn, &mut scratch).await?
            }
            None => {
                Responder::new(&mut conn)
                    .send_status(StatusCode::NotFound)
                    .await?;
                true
            }
        };

        if close {
            conn.shutdown().await?;
        }
        Ok(())
    }

    /// Invokes the handler of a matched route. Returns whether the
    /// connection should be closed afterwards.
    async fn dispatch<S>(
        &self,
        route: &Route,
        ctx: &RequestContext,
        conn: &mut Connection<S>,
        scratch: &mut ScratchBuf,
    ) -> anyhow::Result<bool>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        match route.handler() {
            RouteHandler::Fixed { content_type, body } => {
                let mut rsp = Responder::new(conn);
                rsp.send_status(StatusCode::Ok).await?;
                rsp.send_content_type_str(content_type).await?;
                rsp.end_headers().await?;
                if ctx.method() != Method::HEAD {
                    rsp.write(body).await?;
                }
                Ok(true)
            }

            RouteHandler::ServeFile => {
                let Some(filename) = file_from_path(ctx.path()) else {
                    Responder::new(conn)
                        .send_status(StatusCode::NotFound)
                        .await?;
                    return Ok(true);
                };
                match self.storage.open_read(&filename) {
                    Ok(mut file) => {
                        let mime_type = mime::from_filename(&filename);
                        let mut rsp = Responder::new(conn);
                        rsp.send_status(StatusCode::Ok).await?;
                        rsp.send_content_type(mime_type).await?;
                        rsp.end_headers().await?;
                        if ctx.method() != Method::HEAD {
                            rsp.send_file(file.as_mut(), scratch).await?;
                        }
                    }
                    Err(e) => {
                        debug!("No stored file {}: {}", filename, e);
                        Responder::new(conn)
                            .send_status(StatusCode::NotFound)
                            .await?;
                    }
                }
                Ok(true)
            }

            RouteHandler::Upload { sink } => {
                // The 200 goes out before the transfer outcome is known.
                let mut rsp = Responder::new(conn);
                rsp.send_status(StatusCode::Ok).await?;
                rsp.end_headers().await?;
                let received = receive_body(conn, ctx, sink.as_ref()).await;
                debug!(
                    "Upload received {} of {} declared bytes",
                    received,
                    ctx.content_length()
                );
                Ok(true)
            }
        }
    }
}
