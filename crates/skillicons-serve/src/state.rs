//! Application state shared across all request handlers.

use std::sync::Arc;

use anyhow::Context;
use moka::future::Cache;
use skillicons_core::{AliasTable, IconRegistry};

use crate::config::Config;
use crate::routes::icons::IconsRequest;

/// Cached SVG response with metadata.
#[derive(Clone, Debug)]
pub struct CachedSvg {
    /// Rendered SVG document.
    pub svg: Arc<str>,
    /// Quoted ETag value for the document.
    pub etag: String,
    /// When this entry was cached.
    pub cached_at: chrono::DateTime<chrono::Utc>,
}

impl CachedSvg {
    /// Wrap a freshly rendered document, computing its ETag.
    pub fn new(svg: String) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_64(svg.as_bytes());
        Self {
            etag: format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes())),
            svg: svg.into(),
            cached_at: chrono::Utc::now(),
        }
    }
}

/// Type alias for the rendered SVG cache, keyed by normalized request.
pub type SvgCache = Cache<IconsRequest, CachedSvg>;

/// Entries never go stale since output is a pure function of the request;
/// the TTL only bounds how long rarely used entries hold memory.
const CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(3600);

/// Shared application state available to all request handlers.
///
/// The registry and alias table are built once before the server accepts
/// traffic and are read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Icon lookup table with base-name and themed indexes.
    pub registry: Arc<IconRegistry>,

    /// Short-name aliases.
    pub aliases: &'static AliasTable,

    /// In-memory cache of rendered SVGs.
    pub cache: SvgCache,
}

impl AppState {
    /// Create application state, loading the icon registry.
    ///
    /// Fails if the configured icon source is missing or yields no icons.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let registry = match &config.icons_path {
            Some(path) => IconRegistry::load(path)
                .with_context(|| format!("failed to load icons from {}", path.display()))?,
            None => IconRegistry::embedded().context("failed to load embedded icons")?,
        };

        Ok(Self::with_registry(config, registry))
    }

    /// Create application state around an already-built registry.
    pub fn with_registry(config: Config, registry: IconRegistry) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(CACHE_TTL)
            .build();

        let aliases = AliasTable::builtin();

        tracing::info!(
            icons = registry.len(),
            base_names = registry.base_names().count(),
            aliases = aliases.len(),
            cache_capacity = config.cache_capacity,
            cache_ttl_secs = CACHE_TTL.as_secs(),
            "application state initialized"
        );

        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            aliases,
            cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_svg_etag_is_stable() {
        let a = CachedSvg::new("<svg></svg>".to_string());
        let b = CachedSvg::new("<svg></svg>".to_string());
        assert_eq!(a.etag, b.etag);
        assert!(a.etag.starts_with('"') && a.etag.ends_with('"'));
        assert_eq!(a.etag.len(), 18);
    }

    #[test]
    fn cached_svg_etag_differs_by_content() {
        let a = CachedSvg::new("<svg>a</svg>".to_string());
        let b = CachedSvg::new("<svg>b</svg>".to_string());
        assert_ne!(a.etag, b.etag);
    }

    #[test]
    fn state_from_embedded_icons() {
        let state = AppState::new(Config::default()).unwrap();
        assert!(!state.registry.is_empty());
        assert!(state.registry.is_themed("javascript"));
    }

    #[test]
    fn state_missing_icons_path_fails() {
        let config = Config {
            icons_path: Some("/definitely/not/here".into()),
            ..Config::default()
        };
        let err = AppState::new(config).err().unwrap();
        assert!(err.to_string().contains("failed to load icons"));
    }
}
