//! Server configuration loaded from the command line.
//!
//! The only setting is the listen address. It comes from the `--addr` flag,
//! falling back to the `LISTEN_ADDR` environment variable (or a `.env` file
//! via `dotenvy`) and finally to `:8080`.

use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};

use clap::Parser;

/// Default listen address: every IPv4 interface, port 8080.
pub const DEFAULT_ADDR: &str = ":8080";

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "ip-echo-server")]
#[command(version)]
#[command(about = "Client IP landing page, health check and WebSocket echo", long_about = None)]
pub struct Cli {
    /// HTTP service address (e.g. `:8080`, `127.0.0.1:3000`, `[::1]:8080`)
    #[arg(long, env = "LISTEN_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
}

/// Errors raised while building the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The listen address could not be parsed or resolved.
    #[error("invalid listen address {addr:?}: {reason}")]
    InvalidAddr {
        /// Address as given by the user.
        addr: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::load`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
}

impl ServerConfig {
    /// Parses the process arguments, loading `.env` first so that
    /// `LISTEN_ADDR` can be provided there.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddr`] if the address cannot be parsed
    /// or resolved.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_cli(&Cli::parse())
    }

    /// Builds the configuration from already parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddr`] if the address cannot be parsed
    /// or resolved.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Ok(Self {
            listen_addr: parse_listen_addr(&cli.addr)?,
        })
    }
}

/// Normalizes a listen address into a [`SocketAddr`].
///
/// An empty host (`:8080`) binds every IPv4 interface. Host names are
/// resolved and the first result is used.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidAddr`] when the port is missing or invalid,
/// or when the host cannot be resolved.
pub fn parse_listen_addr(addr: &str) -> Result<SocketAddr, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidAddr {
        addr: addr.to_string(),
        reason,
    };

    if let Some(port) = addr.strip_prefix(':') {
        let port: u16 = port.parse().map_err(|e| invalid(format!("bad port: {e}")))?;
        return Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
    }

    if let Ok(socket_addr) = addr.parse::<SocketAddr>() {
        return Ok(socket_addr);
    }

    addr.to_socket_addrs()
        .map_err(|e| invalid(e.to_string()))?
        .next()
        .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
}
