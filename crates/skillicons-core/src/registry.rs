//! The icon registry: canonical key to raw SVG markup.
//!
//! Canonical keys are either `<base>` or `<base>-<theme>`. Two indexes are
//! derived when the registry is built and never change afterwards:
//! - the base-name index (every key with its theme suffix stripped)
//! - the themed set (base names that have at least one themed variant)

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/embedded_icons.rs"));
}

/// Theme suffixes recognised on registry keys.
pub const THEMES: [&str; 3] = ["light", "dark", "auto"];

/// Return the theme suffix of a canonical key, if it has one.
///
/// `"javascript-dark"` yields `Some("dark")`; `"rust"` and `"-dark"` yield `None`.
pub fn theme_suffix(key: &str) -> Option<&str> {
    let (base, theme) = key.rsplit_once('-')?;
    (!base.is_empty() && THEMES.contains(&theme)).then_some(theme)
}

/// Strip the theme suffix from a canonical key.
pub fn base_name(key: &str) -> &str {
    match theme_suffix(key) {
        Some(theme) => &key[..key.len() - theme.len() - 1],
        None => key,
    }
}

/// Immutable icon lookup table with its derived indexes.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: HashMap<String, String>,
    /// Ordered so that wildcard expansion is deterministic.
    base_names: BTreeSet<String>,
    themed: HashSet<String>,
}

impl IconRegistry {
    /// Build a registry from `(key, markup)` pairs.
    ///
    /// Keys are trimmed and lowercased; markup is stored verbatim, since
    /// it is spliced into composites byte for byte. Fails with
    /// [`Error::EmptyRegistry`] if no usable entry remains, so a
    /// misconfigured deployment stops at startup instead of serving
    /// empty images.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut icons: HashMap<String, String> = HashMap::new();
        for (key, markup) in entries {
            let key = key.as_ref().trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            icons.insert(key, markup.into());
        }

        if icons.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let mut base_names = BTreeSet::new();
        let mut themed = HashSet::new();
        for key in icons.keys() {
            let base = base_name(key);
            base_names.insert(base.to_string());
            if theme_suffix(key).is_some() {
                themed.insert(base.to_string());
            }
        }

        tracing::debug!(
            icons = icons.len(),
            base_names = base_names.len(),
            themed = themed.len(),
            "icon registry built"
        );

        Ok(Self {
            icons,
            base_names,
            themed,
        })
    }

    /// Registry of the icons packaged from `assets/` at build time.
    pub fn embedded() -> Result<Self> {
        Self::from_entries(embedded::EMBEDDED_ICONS.iter().copied())
    }

    /// Load a registry from disk.
    ///
    /// `path` is either a directory of `<key>.svg` files or a JSON file
    /// mapping keys to SVG markup.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }

        if path.is_dir() {
            Self::load_dir(path)
        } else {
            Self::load_json(path)
        }
    }

    fn load_dir(dir: &Path) -> Result<Self> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_svg = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
            if !is_svg {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping icon with non-UTF-8 file name");
                continue;
            };

            let markup = fs::read_to_string(&path)?;
            entries.push((stem.to_string(), markup));
        }

        Self::from_entries(entries)
    }

    fn load_json(file: &Path) -> Result<Self> {
        let raw = fs::read_to_string(file)?;
        let map: HashMap<String, String> = serde_json::from_str(&raw)?;
        Self::from_entries(map)
    }

    /// Look up the markup for a canonical key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.icons.get(key).map(String::as_str)
    }

    /// Whether `name` is a known base name.
    pub fn contains_base(&self, name: &str) -> bool {
        self.base_names.contains(name)
    }

    /// Whether `name` has at least one theme-suffixed variant.
    pub fn is_themed(&self, name: &str) -> bool {
        self.themed.contains(name)
    }

    /// All distinct base names, in lexicographic order.
    pub fn base_names(&self) -> impl Iterator<Item = &str> {
        self.base_names.iter().map(String::as_str)
    }

    /// Number of canonical keys.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Always `false` for a successfully built registry.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
