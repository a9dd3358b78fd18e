use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use umanager_telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "UMANAGER_LINK_GRPC_LISTEN_ADDR";
pub const REQUEST_TIMEOUT_ENV: &str = "UMANAGER_LINK_REQUEST_TIMEOUT_MS";
pub const LOG_FORMAT_ENV: &str = "UMANAGER_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:50051";
pub const DEFAULT_REQUEST_TIMEOUT_MS: &str = "5000";

#[derive(Debug, Parser)]
#[command(name = "link-grpc-server")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Upper bound for each storage call, in milliseconds.
    #[arg(
        long,
        env = REQUEST_TIMEOUT_ENV,
        default_value = DEFAULT_REQUEST_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub request_timeout_ms: u64,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
