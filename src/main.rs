use std::sync::Arc;

use bytes::Bytes;

use wicket::config::Config;
use wicket::http::headers::HeaderSet;
use wicket::http::processor::Processor;
use wicket::http::request::Method;
use wicket::http::routes::{MethodFilter, Route, RouteHandler, RouteTable};
use wicket::server::listener;
use wicket::storage::{FsStorage, Storage, StorageSink};

const INDEX_PAGE: &[u8] = b"<html><body>\
<h1>wicket</h1>\
<p>PUT a file to /upload/&lt;name&gt;, then fetch it by name.</p>\
</body></html>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(&cfg.static_files.root));
    let uploads: Arc<dyn Storage> = Arc::new(FsStorage::new(&cfg.uploads.root));

    let routes = RouteTable::new(vec![
        Route::new(
            "/upload/*",
            MethodFilter::Is(Method::PUT),
            RouteHandler::Upload {
                sink: Arc::new(StorageSink::new(uploads)),
            },
        ),
        Route::new(
            "/",
            MethodFilter::Is(Method::GET),
            RouteHandler::Fixed {
                content_type: "text/html",
                body: Bytes::from_static(INDEX_PAGE),
            },
        ),
        Route::new("/*", MethodFilter::Any, RouteHandler::ServeFile),
    ]);

    let headers = HeaderSet::new(["Content-Length"]);
    let processor = Processor::new(routes, headers, storage);

    tokio::select! {
        res = listener::run(&cfg, &processor) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
