//! # Server Configuration
//!
//! Bind address for the HTTP listener.

/// Host and port the server binds to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Formats the bind address as `host:port`.
    ///
    /// # Example
    /// ```
    /// use imgconv_web::config::server::ServerConfig;
    ///
    /// let cfg = ServerConfig { host: "0.0.0.0".into(), port: 3000 };
    /// assert_eq!(cfg.address(), "0.0.0.0:3000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}
