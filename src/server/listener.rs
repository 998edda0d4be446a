use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, FilesConfig};
use crate::http::connection::Connection;
use crate::store::PathLocks;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, cfg.files.clone()).await
}

/// Accept loop: one spawned task per connection. A failing connection is
/// logged and never takes the loop down, and neither does a failing accept.
pub async fn serve(listener: TcpListener, files: FilesConfig) -> anyhow::Result<()> {
    let locks = PathLocks::new();

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!(error = %e, "accept failed");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let files = files.clone();
        let locks = locks.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, files, locks);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
