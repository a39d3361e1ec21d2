//! Server configuration from environment.

use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000).
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string.
    pub database_url: String,
}

impl ServerConfig {
    /// Read from env: `BIND_ADDR` and `DATABASE_URL`. An unparseable
    /// `BIND_ADDR` falls back to the default.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_bind_addr);
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/trivia".into());
        Self {
            bind_addr,
            database_url,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port() {
        assert_eq!(default_bind_addr().port(), 5000);
    }
}
