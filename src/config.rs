use std::env;

use crate::regression::DEFAULT_POINT_COUNT;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Ranges enforced on requests before they reach the trainer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Upper bound for the learning rate, the lower one is an exclusive 0.
    pub max_learning_rate: f64,
    pub min_iterations: usize,
    pub max_iterations: usize,
    /// Smallest user uploaded dataset accepted for training.
    pub min_custom_points: usize,
    pub min_line_points: usize,
    pub max_line_points: usize,
    pub default_line_points: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_learning_rate: 1.0,
            min_iterations: 1,
            max_iterations: 10_000,
            min_custom_points: 3,
            min_line_points: 2,
            max_line_points: 10_000,
            default_line_points: DEFAULT_POINT_COUNT,
        }
    }
}

/// Configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub limits: Limits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            limits: Limits::default(),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT` from the environment, falling back to the defaults.
    ///
    /// # Errors
    /// Returns a message if `PORT` is set but isn't a valid port number.
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(host) = host {
            config.host = host;
        }

        if let Some(port) = port {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| format!("invalid PORT {port:?}: {e}"))?;
        }

        Ok(config)
    }

    /// The `host:port` string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
