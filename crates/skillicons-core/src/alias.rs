//! Short-name aliases and the alias resolver.
//!
//! Users write `js,py,k8s`; the registry knows `javascript-dark`,
//! `python-dark` and `kubernetes`. The resolver bridges the two.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::registry::IconRegistry;

/// Built-in alias to base-name mapping.
const SHORT_NAMES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("tailwind", "tailwindcss"),
    ("vue", "vuejs"),
    ("nuxt", "nuxtjs"),
    ("go", "golang"),
    ("cf", "cloudflare"),
    ("wasm", "webassembly"),
    ("postgres", "postgresql"),
    ("k8s", "kubernetes"),
    ("next", "nextjs"),
    ("mongo", "mongodb"),
    ("md", "markdown"),
    ("ps", "photoshop"),
    ("ai", "illustrator"),
    ("pr", "premiere"),
    ("ae", "aftereffects"),
    ("scss", "sass"),
    ("sc", "scala"),
    ("net", "dotnet"),
    ("gatsbyjs", "gatsby"),
    ("gql", "graphql"),
    ("vlang", "v"),
    ("amazonwebservices", "aws"),
    ("bots", "discordbots"),
    ("express", "expressjs"),
    ("googlecloud", "gcp"),
    ("mui", "materialui"),
    ("windi", "windicss"),
    ("unreal", "unrealengine"),
    ("nest", "nestjs"),
    ("ktorio", "ktor"),
    ("pwsh", "powershell"),
    ("au", "audition"),
    ("rollup", "rollupjs"),
    ("rxjs", "reactivex"),
    ("rxjava", "reactivex"),
    ("ghactions", "githubactions"),
    ("sklearn", "scikitlearn"),
    ("ml5", "ml5js"),
    ("vb", "visualbasic"),
    ("an", "animate"),
    ("ca", "capture"),
    ("cc", "creativecloud"),
    ("ch", "characteranimator"),
    ("me", "mediaencoder"),
    ("pl", "prelude"),
    ("ru", "premiererush"),
    ("fs", "fuse"),
    ("id", "indesign"),
    ("ic", "incopy"),
    ("sp", "adobespark"),
    ("dw", "dreamweaver"),
    ("dn", "dimension"),
    ("ar", "aero"),
    ("psc", "photoshopclassic"),
    ("psx", "photoshopexpress"),
    ("lr", "lightroom"),
    ("lrc", "lightroomclassic"),
    ("fr", "fresco"),
    ("pf", "portfolio"),
    ("st", "stock"),
    ("be", "behance"),
    ("br", "bridge"),
    ("million", "millionjs"),
    ("asm", "assembly"),
    ("pop", "popos"),
    ("nix", "nixos"),
    ("hc", "holyc"),
    ("yml", "yaml"),
    ("twitter", "x"),
    ("arc", "arcbrowser"),
    ("hf", "huggingface"),
    ("sqla", "sqlalchemy"),
    ("notepad++", "notepadpp"),
    ("jq", "jqlang"),
];

static BUILTIN: LazyLock<AliasTable> =
    LazyLock::new(|| AliasTable::from_pairs(SHORT_NAMES.iter().copied()));

/// Immutable mapping from informal alias to base name.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// The built-in alias table, initialised on first use.
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN
    }

    /// Build a table from `(alias, base_name)` pairs. Later pairs win.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(alias, target)| (alias.into(), target.into()))
                .collect(),
        }
    }

    /// Base name an alias points at.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Maps user tokens to canonical registry keys.
///
/// Order and duplicates of the input are preserved. Tokens that are neither
/// a base name nor an alias are dropped without error. The theme is not
/// validated: an unknown theme produces a key the registry lacks, and the
/// compositor skips it.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a IconRegistry,
    aliases: &'a AliasTable,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a IconRegistry, aliases: &'a AliasTable) -> Self {
        Self { registry, aliases }
    }

    /// Resolve tokens in order.
    pub fn resolve<I, S>(&self, tokens: I, theme: &str) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter_map(|token| self.resolve_token(token.as_ref(), theme))
            .collect()
    }

    /// Resolve the `all` wildcard: one key per distinct base name.
    pub fn resolve_all(&self, theme: &str) -> Vec<String> {
        self.resolve(self.registry.base_names(), theme)
    }

    fn resolve_token(&self, token: &str, theme: &str) -> Option<String> {
        if self.registry.contains_base(token) {
            return Some(self.with_theme(token, theme));
        }

        match self.aliases.get(token) {
            Some(target) => Some(self.with_theme(target, theme)),
            None => {
                tracing::trace!(token = %token, "dropping unresolvable icon token");
                None
            }
        }
    }

    fn with_theme(&self, base: &str, theme: &str) -> String {
        if self.registry.is_themed(base) {
            format!("{base}-{theme}")
        } else {
            base.to_string()
        }
    }
}
