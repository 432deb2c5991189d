//! Shared environment configuration for the visual-math binaries.
//!
//! Reads `VISUAL_MATH_HOST` / `VISUAL_MATH_PORT` for the server bind address
//! and `RUST_LOG` for the tracing filter.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEFAULT_PORT: u16 = 5000;

/// Install the global tracing subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();
}

/// Read `VISUAL_MATH_HOST` (default 127.0.0.1).
pub fn server_host() -> IpAddr {
    std::env::var("VISUAL_MATH_HOST")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

/// Read `VISUAL_MATH_PORT` (default 5000).
pub fn server_port() -> u16 {
    std::env::var("VISUAL_MATH_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn bind_address() -> SocketAddr {
    SocketAddr::new(server_host(), server_port())
}
