//! Grid compositor: many icon fragments in, one SVG document out.
//!
//! Every source icon lives in a 256x256 box. Placing icons on a 300 unit
//! grid leaves a 44 unit gutter between neighbours, and trimming 44 units
//! off the total content size removes the trailing gutter on the right and
//! bottom edges.

use std::fmt::Write as _;

use crate::registry::IconRegistry;

/// Native size of one grid cell, in source units.
pub const CELL_SIZE: usize = 300;

/// Gutter between cells that is not part of the drawn content.
pub const CELL_PADDING: usize = 44;

/// On-screen size of one icon, in pixels.
pub const ICON_SIZE: usize = 48;

/// Source units to display pixels.
pub const SCALE: f64 = ICON_SIZE as f64 / (CELL_SIZE - CELL_PADDING) as f64;

/// Icons per row when the request does not say otherwise.
pub const DEFAULT_PER_LINE: usize = 15;

/// Horizontal alignment of the composite inside its container.
///
/// Only the outer `width` attribute changes; icon placement is identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parse an alignment name. Anything unrecognised is `Left`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" => Self::Center,
            "right" => Self::Right,
            _ => Self::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Canvas geometry for `count` icons laid out `per_line` to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: usize,
    pub rows: usize,
    /// Width of the viewBox, in source units.
    pub content_width: usize,
    /// Height of the viewBox, in source units.
    pub content_height: usize,
    /// Rendered width in pixels.
    pub display_width: u64,
    /// Rendered height in pixels.
    pub display_height: u64,
}

impl GridGeometry {
    /// Compute the geometry. A `per_line` of zero is treated as one.
    pub fn new(count: usize, per_line: usize) -> Self {
        let per_line = per_line.max(1);
        let columns = per_line.min(count);
        let rows = count.div_ceil(per_line);

        // Zero icons would give -44; clamp so the empty image stays valid
        let content_width = (columns * CELL_SIZE).saturating_sub(CELL_PADDING);
        let content_height = (rows * CELL_SIZE).saturating_sub(CELL_PADDING);

        Self {
            columns,
            rows,
            content_width,
            content_height,
            display_width: scale(content_width),
            display_height: scale(content_height),
        }
    }
}

fn scale(units: usize) -> u64 {
    (units as f64 * SCALE).round() as u64
}

/// Layout options for one composite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    pub per_line: usize,
    pub titles: bool,
    pub align: Alignment,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            per_line: DEFAULT_PER_LINE,
            titles: false,
            align: Alignment::Left,
        }
    }
}

/// Assembles registry fragments into a single SVG document.
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'a> {
    registry: &'a IconRegistry,
}

impl<'a> Compositor<'a> {
    pub fn new(registry: &'a IconRegistry) -> Self {
        Self { registry }
    }

    /// Pair each key with its markup, skipping keys the registry lacks.
    pub fn collect<'k, I>(&self, keys: I) -> Vec<(&'k str, &'a str)>
    where
        I: IntoIterator<Item = &'k str>,
    {
        keys.into_iter()
            .filter_map(|key| match self.registry.get(key) {
                Some(markup) => Some((key, markup)),
                None => {
                    tracing::debug!(key = %key, "skipping icon missing from registry");
                    None
                }
            })
            .collect()
    }

    /// Render the composite image. Never fails; an empty or fully
    /// unresolvable key list yields an empty but well-formed document.
    pub fn compose<S: AsRef<str>>(&self, keys: &[S], layout: &Layout) -> String {
        let fragments = self.collect(keys.iter().map(|key| key.as_ref()));
        let per_line = layout.per_line.max(1);
        let geometry = GridGeometry::new(fragments.len(), per_line);

        let body_len: usize = fragments.iter().map(|(_, markup)| markup.len() + 64).sum();
        let mut svg = String::with_capacity(body_len + 160);
        svg.push_str(&open_tag(&geometry, layout.align));

        for (index, (key, markup)) in fragments.iter().enumerate() {
            let x = (index % per_line) * CELL_SIZE;
            let y = (index / per_line) * CELL_SIZE;

            // Writing into a String cannot fail
            let _ = write!(svg, r#"<g transform="translate({x},{y})">"#);
            if layout.titles {
                let _ = write!(svg, "<title>{}</title>", escape_text(key));
            }
            svg.push_str(markup);
            svg.push_str("</g>");
        }

        svg.push_str("</svg>");
        svg
    }
}

fn open_tag(geometry: &GridGeometry, align: Alignment) -> String {
    let width = match align {
        Alignment::Left => geometry.display_width.to_string(),
        Alignment::Center => "100%".to_string(),
        Alignment::Right => format!("calc(200% - {}px)", geometry.display_width),
    };

    format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {vw} {vh}" xmlns="http://www.w3.org/2000/svg">"#,
        height = geometry.display_height,
        vw = geometry.content_width,
        vh = geometry.content_height,
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> IconRegistry {
        IconRegistry::from_entries([
            ("javascript-dark", "<svg>jsd</svg>"),
            ("python-dark", "<svg>pyd</svg>"),
            ("rust", "<svg>rs</svg>"),
            ("golang", "<svg>go</svg>"),
        ])
        .unwrap()
    }

    fn count_groups(svg: &str) -> usize {
        svg.matches("<g transform=").count()
    }

    #[test]
    fn test_scale_constant() {
        assert!((SCALE - 0.1875).abs() < f64::EPSILON);
    }

    #[test]
    fn test_alignment_parse() {
        assert_eq!(Alignment::parse("left"), Alignment::Left);
        assert_eq!(Alignment::parse("center"), Alignment::Center);
        assert_eq!(Alignment::parse("RIGHT"), Alignment::Right);
        assert_eq!(Alignment::parse("justify"), Alignment::Left);
        assert_eq!(Alignment::parse(""), Alignment::Left);
    }

    #[test]
    fn test_geometry_single_row() {
        let g = GridGeometry::new(2, 15);
        assert_eq!(g.columns, 2);
        assert_eq!(g.rows, 1);
        assert_eq!(g.content_width, 556);
        assert_eq!(g.content_height, 256);
        assert_eq!(g.display_width, 104); // 556 * 0.1875 = 104.25
        assert_eq!(g.display_height, 48);
    }

    #[test]
    fn test_geometry_wraps() {
        let g = GridGeometry::new(7, 3);
        assert_eq!(g.columns, 3);
        assert_eq!(g.rows, 3);
        assert_eq!(g.content_width, 856);
        assert_eq!(g.content_height, 856);
        assert_eq!(g.display_width, 161); // 160.5 rounds up
    }

    #[test]
    fn test_geometry_rounds_half_up() {
        // 15 columns: 4456 * 0.1875 = 835.5
        let g = GridGeometry::new(15, 15);
        assert_eq!(g.display_width, 836);
    }

    #[test]
    fn test_geometry_invariants() {
        for n in 0..40 {
            for p in 1..20 {
                let g = GridGeometry::new(n, p);
                assert_eq!(g.rows, n.div_ceil(p));
                assert_eq!(g.columns, p.min(n));
                if n <= p {
                    assert_eq!(GridGeometry::new(n, p * 2), g);
                }
            }
        }
    }

    #[test]
    fn test_geometry_empty_is_clamped() {
        let g = GridGeometry::new(0, 15);
        assert_eq!(g.columns, 0);
        assert_eq!(g.rows, 0);
        assert_eq!(g.content_width, 0);
        assert_eq!(g.content_height, 0);
        assert_eq!(g.display_width, 0);
        assert_eq!(g.display_height, 0);
    }

    #[test]
    fn test_geometry_zero_per_line() {
        assert_eq!(GridGeometry::new(3, 0), GridGeometry::new(3, 1));
    }

    #[test]
    fn test_compose_left() {
        let registry = registry();
        let svg = Compositor::new(&registry).compose(&["rust", "golang"], &Layout::default());
        assert_eq!(
            svg,
            concat!(
                r#"<svg width="104" height="48" viewBox="0 0 556 256" xmlns="http://www.w3.org/2000/svg">"#,
                r#"<g transform="translate(0,0)"><svg>rs</svg></g>"#,
                r#"<g transform="translate(300,0)"><svg>go</svg></g>"#,
                "</svg>"
            )
        );
    }

    #[test]
    fn test_compose_center() {
        let registry = registry();
        let layout = Layout {
            align: Alignment::Center,
            ..Layout::default()
        };
        let svg = Compositor::new(&registry).compose(&["rust"], &layout);
        assert!(svg.starts_with(r#"<svg width="100%" height="48" viewBox="0 0 256 256""#));
    }

    #[test]
    fn test_compose_right() {
        let registry = registry();
        let layout = Layout {
            align: Alignment::Right,
            ..Layout::default()
        };
        let svg = Compositor::new(&registry).compose(&["rust", "golang"], &layout);
        assert!(svg.starts_with(
            r#"<svg width="calc(200% - 104px)" height="48" viewBox="0 0 556 256""#
        ));
    }

    #[test]
    fn test_compose_wraps_rows() {
        let registry = registry();
        let layout = Layout {
            per_line: 2,
            ..Layout::default()
        };
        let svg = Compositor::new(&registry)
            .compose(&["rust", "golang", "python-dark"], &layout);
        assert!(svg.contains(r#"viewBox="0 0 556 556""#));
        assert!(svg.contains(r#"<g transform="translate(0,300)"><svg>pyd</svg></g>"#));
    }

    #[test]
    fn test_missing_keys_leave_no_gaps() {
        let registry = registry();
        let svg = Compositor::new(&registry).compose(
            &["rust", "javascript-neon", "missing", "golang"],
            &Layout::default(),
        );
        assert_eq!(count_groups(&svg), 2);
        assert!(svg.contains(r#"<g transform="translate(300,0)"><svg>go</svg></g>"#));
        assert!(!svg.contains("translate(600,0)"));
    }

    #[test]
    fn test_titles_use_canonical_key() {
        let registry = registry();
        let layout = Layout {
            titles: true,
            ..Layout::default()
        };
        let svg = Compositor::new(&registry).compose(&["missing", "javascript-dark"], &layout);
        assert!(svg.contains(
            r#"<g transform="translate(0,0)"><title>javascript-dark</title><svg>jsd</svg></g>"#
        ));
    }

    #[test]
    fn test_compose_empty() {
        let registry = registry();
        let svg = Compositor::new(&registry).compose::<&str>(&[], &Layout::default());
        assert_eq!(
            svg,
            r#"<svg width="0" height="0" viewBox="0 0 0 0" xmlns="http://www.w3.org/2000/svg"></svg>"#
        );
    }

    #[test]
    fn test_compose_zero_per_line_does_not_panic() {
        let registry = registry();
        let layout = Layout {
            per_line: 0,
            ..Layout::default()
        };
        let svg = Compositor::new(&registry).compose(&["rust", "golang"], &layout);
        assert_eq!(count_groups(&svg), 2);
        assert!(svg.contains("translate(0,300)"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let registry = registry();
        let compositor = Compositor::new(&registry);
        let keys = ["golang", "rust", "python-dark", "javascript-dark"];
        let layout = Layout {
            per_line: 3,
            titles: true,
            align: Alignment::Right,
        };
        assert_eq!(compositor.compose(&keys, &layout), compositor.compose(&keys, &layout));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a<b>&c"), "a&lt;b&gt;&amp;c");
    }
}
