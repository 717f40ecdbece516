use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use linreg::{config::ServerConfig, service};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env().map_err(|e| anyhow!(e))?;
    let addr = config.bind_addr();

    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("received ctrl-c, shutting down");
                token.cancel();
            }
            Err(e) => warn!("unable to listen for ctrl-c: {e}"),
        }
    });

    service::serve(config, shutdown)
        .await
        .with_context(|| format!("failed to serve at {addr}"))
}
