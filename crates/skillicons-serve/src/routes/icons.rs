//! Composite icon image route.
//!
//! Handles `GET /api/icons?i=js,py,rust&theme=dark&perline=10&align=center&titles`.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use skillicons_core::{Alignment, Compositor, DEFAULT_PER_LINE, Layout, Resolver};

use crate::error::ServeError;
use crate::state::{AppState, CachedSvg};

/// Output depends only on the query string, so it may be cached for a year.
const CACHE_CONTROL: &str = "public, max-age=31556952, s-maxage=31536000";

/// Raw query parameters, exactly as sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconsQuery {
    /// Comma-separated icon tokens, or `all`.
    pub i: Option<String>,
    /// Theme suffix for themed icons (default: "auto").
    pub theme: Option<String>,
    /// Icons per row (default: 15).
    pub perline: Option<String>,
    /// "left" (default), "center" or "right".
    pub align: Option<String>,
    /// Presence flag; any value, including empty, enables titles.
    pub titles: Option<String>,
}

/// Which icons were asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconSelection {
    /// Every known base icon.
    All,
    /// Tokens in request order, trimmed and lowercased.
    Tokens(Vec<String>),
}

/// A validated, normalized icon request.
///
/// Also the response cache key: two queries share a cached image only when
/// they normalize to the same request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconsRequest {
    pub selection: IconSelection,
    pub theme: String,
    pub layout: Layout,
}

impl IconsRequest {
    /// Normalize raw query parameters.
    ///
    /// Only a missing or blank `i` is an error. An unparsable or zero
    /// `perline` falls back to the default, and an unknown `align` is
    /// treated as left.
    pub fn from_query(query: IconsQuery) -> Result<Self, ServeError> {
        let raw_icons = query.i.as_deref().map(str::trim).unwrap_or_default();
        if raw_icons.is_empty() {
            return Err(ServeError::MissingIcons);
        }

        let selection = if raw_icons.eq_ignore_ascii_case("all") {
            IconSelection::All
        } else {
            IconSelection::Tokens(
                raw_icons
                    .split(',')
                    .map(|token| token.trim().to_lowercase())
                    .filter(|token| !token.is_empty())
                    .collect(),
            )
        };

        let theme = query
            .theme
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "auto".to_string());

        let per_line = parse_per_line(query.perline.as_deref());
        let align = query
            .align
            .as_deref()
            .map(Alignment::parse)
            .unwrap_or_default();

        Ok(Self {
            selection,
            theme,
            layout: Layout {
                per_line,
                titles: query.titles.is_some(),
                align,
            },
        })
    }

    /// Resolve tokens and composite the image.
    pub fn render(&self, state: &AppState) -> String {
        let resolver = Resolver::new(&state.registry, state.aliases);
        let keys = match &self.selection {
            IconSelection::All => resolver.resolve_all(&self.theme),
            IconSelection::Tokens(tokens) => resolver.resolve(tokens, &self.theme),
        };

        Compositor::new(&state.registry).compose(&keys, &self.layout)
    }
}

fn parse_per_line(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_PER_LINE;
    };

    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::debug!(perline = %raw, "invalid perline, using default");
            DEFAULT_PER_LINE
        }
    }
}

/// Handle a composite icon request.
///
/// 1. Normalizes the query (400 if no icons were given)
/// 2. Serves a cached render if one exists for the normalized request
/// 3. Otherwise resolves aliases, composites the SVG, and caches it
pub async fn icons_handler(
    State(state): State<AppState>,
    Query(query): Query<IconsQuery>,
) -> Result<Response, ServeError> {
    let request = IconsRequest::from_query(query)?;

    if let Some(cached) = state.cache.get(&request).await {
        tracing::debug!(request = ?request, cached_at = %cached.cached_at, "cache hit");
        return Ok(svg_response(&cached));
    }

    tracing::debug!(request = ?request, "cache miss, rendering");

    // `all` against a large registry produces a big document; keep it off
    // the async worker threads
    let render_state = state.clone();
    let render_request = request.clone();
    let svg = tokio::task::spawn_blocking(move || render_request.render(&render_state))
        .await
        .map_err(|e| ServeError::Internal(anyhow::anyhow!("render task failed: {e}")))?;

    let cached = CachedSvg::new(svg);
    state.cache.insert(request, cached.clone()).await;

    Ok(svg_response(&cached))
}

/// Build an HTTP response with SVG content and cache headers.
fn svg_response(cached: &CachedSvg) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("image/svg+xml"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    if let Ok(val) = HeaderValue::from_str(&cached.etag) {
        headers.insert(header::ETAG, val);
    }

    (StatusCode::OK, headers, cached.svg.to_string()).into_response()
}
