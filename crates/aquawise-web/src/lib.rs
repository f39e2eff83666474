//! aquawise-web - HTTP API for AquaWise using Axum

pub mod error;
pub mod router;

pub use error::ApiError;
pub use router::{AppState, create_router};

use anyhow::{Context, Result};
use aquawise_core::{CoreError, Entropy};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::info;

/// Default bind host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

/// Startup configuration for the web server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub entropy: Entropy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            entropy: Entropy::Os,
        }
    }
}

impl ServerConfig {
    /// Resolve `host:port` into a socket address
    ///
    /// Accepts IPv4/IPv6 literals and `localhost`.
    pub fn socket_addr(&self) -> Result<SocketAddr, CoreError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse::<IpAddr>()
                .map_err(|e| CoreError::InvalidConfig {
                    message: format!("invalid host '{}': {}", self.host, e),
                })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Run the web server until the listener fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let router = create_router(AppState::new(config.entropy));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(entropy = ?config.entropy, "Web server listening on http://{}", addr);
    println!("AquaWise listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_binds_all_interfaces() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_localhost_and_ipv6() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());

        let config = ServerConfig {
            host: "::1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap(), "[::1]:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.socket_addr(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }
}
