//! HTTP listener and runtime sizing.

use std::net::{IpAddr, Ipv4Addr};

use serde::Deserialize;

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind; every interface by default.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Listen port. `0` is rejected by `AppConfig::validate`.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Worker threads for the multi-thread runtime built in `main`.
    ///
    /// `0` leaves the count to tokio, which uses one thread per CPU core.
    /// Analysis is CPU-bound and short, so this is the main throughput knob.
    #[serde(default)]
    pub workers: usize,
}

const fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}
