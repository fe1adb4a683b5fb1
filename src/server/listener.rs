use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::processor::Processor;

/// Accepts connections and hands each to the processor, strictly one at a
/// time: a second inbound connection waits in the listen backlog until the
/// current request has been handled to completion.
pub async fn run(cfg: &Config, processor: &Processor) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        if let Err(e) = processor.process(socket).await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
