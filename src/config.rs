use crate::models::RosterConfig;
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use tracing::{info, warn};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Load the seed roster from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RosterConfig, String> {
    let path = path.as_ref();
    info!("Loading roster from: {}", path.display());

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read roster file '{}': {}", path.display(), e))?;

    let config: RosterConfig = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse YAML roster: {}", e))?;

    config.validate()?;

    info!(
        "Roster loaded successfully with {} activity(ies)",
        config.activities.len()
    );
    for (name, activity) in &config.activities {
        info!(
            "  Activity '{}': {}/{} participant(s)",
            name,
            activity.participants.len(),
            activity.max_participants
        );
    }

    Ok(config)
}

/// Load the seed roster with fallback options
pub fn load_config_with_fallback() -> Result<RosterConfig, String> {
    if let Ok(config_path) = std::env::var("ROSTER_CONFIG_PATH") {
        match load_config(&config_path) {
            Ok(config) => return Ok(config),
            Err(e) => warn!(
                "Failed to load roster from ROSTER_CONFIG_PATH ({}): {}",
                config_path, e
            ),
        }
    }

    for path in ["roster.yaml", "roster.yml"] {
        if Path::new(path).exists() {
            match load_config(path) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load roster from '{}': {}", path, e),
            }
        }
    }

    Err(
        "No roster file found. Create a roster.yaml file or set ROSTER_CONFIG_PATH. \
        See roster.example.yaml for an example."
            .to_string(),
    )
}

/// Network settings for the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `HOST` and `PORT` from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }

    /// Resolve the bind address; `host` may be an IP literal or a hostname
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| format!("Invalid bind address '{}:{}': {}", self.host, self.port, e))?
            .next()
            .ok_or_else(|| {
                format!(
                    "Bind address '{}:{}' resolved to no addresses",
                    self.host, self.port
                )
            })
    }
}
