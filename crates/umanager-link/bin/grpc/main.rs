mod cli;

use crate::cli::CLI;
use clap::Parser;
use std::net::SocketAddr;
use tracing::{info, warn};
use umanager_link::LinkGrpcServer;
use umanager_storage::{InMemoryLinkRepository, LinkRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    umanager_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        request_timeout_ms = config.request_timeout_ms,
        storage_backend = "in-memory",
        "starting link gRPC server"
    );

    let service = LinkGrpcServer::new(InMemoryLinkRepository::new(), config.request_timeout());
    run_server(config.listen_addr, service).await?;

    info!("link gRPC server stopped");
    Ok(())
}

async fn run_server<R: LinkRepository>(
    listen_addr: SocketAddr,
    service: LinkGrpcServer<R>,
) -> Result<(), tonic::transport::Error> {
    umanager_link::server::router(service)
        .await
        .serve_with_shutdown(listen_addr, shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received ctrl-c, shutting down"),
        Err(error) => {
            warn!(error = %error, "failed to listen for ctrl-c, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
