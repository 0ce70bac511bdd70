//! Server configuration from command line and environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Document manager HTTP server with keyword-expansion search
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "DOC_SEARCH_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "DOC_SEARCH_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Start with an empty store instead of the sample documents
    #[arg(long, env = "DOC_SEARCH_NO_SEED")]
    pub no_seed: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "DOC_SEARCH_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
