//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Default in-process cache capacity (number of rendered images).
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3000").
    pub bind_addr: String,

    /// Optional icon source overriding the icons embedded at build time.
    /// Either a directory of `.svg` files or a JSON map file.
    pub icons_path: Option<PathBuf>,

    /// Maximum number of rendered SVGs held in memory.
    pub cache_capacity: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `SKILLICONS_BIND_ADDR`: Server bind address (default: "0.0.0.0:3000")
    /// - `SKILLICONS_ICONS_PATH`: Icon directory or JSON map (default: embedded icons)
    /// - `SKILLICONS_CACHE_CAPACITY`: Rendered image cache size (default: 10000)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SKILLICONS_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let icons_path = std::env::var("SKILLICONS_ICONS_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let cache_capacity = match std::env::var("SKILLICONS_CACHE_CAPACITY") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!("SKILLICONS_CACHE_CAPACITY must be a non-negative integer: {e}")
            })?,
            Err(_) => DEFAULT_CACHE_CAPACITY,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            icons_path = ?icons_path,
            cache_capacity,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            icons_path,
            cache_capacity,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            icons_path: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
