//! Command-line and environment configuration.

use clap::Parser;
use std::time::Duration;

/// In-memory user directory served over REST/JSON.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "user-directory", version)]
pub struct ServerConfig {
    /// Service name, reported in the startup log.
    #[arg(long, env = "USER_DIRECTORY_NAME", default_value = "demo")]
    pub name: String,

    /// Interface to bind.
    #[arg(long, env = "USER_DIRECTORY_HOST", default_value = "localhost")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "USER_DIRECTORY_PORT", default_value_t = 9090)]
    pub port: u16,

    /// Capacity of the directory actor's mailbox.
    #[arg(long, env = "USER_DIRECTORY_BUFFER", default_value_t = 32)]
    pub buffer_size: usize,

    /// Seconds before an in-flight request is answered with 408.
    #[arg(long, env = "USER_DIRECTORY_TIMEOUT", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// `host:port`, as accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_deployment() {
        let config = ServerConfig::try_parse_from(["user-directory"]).unwrap();
        assert_eq!(config.name, "demo");
        assert_eq!(config.bind_address(), "localhost:9090");
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "user-directory",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--request-timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(ServerConfig::try_parse_from(["user-directory", "--port", "70000"]).is_err());
    }
}
