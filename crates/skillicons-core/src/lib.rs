//! Core logic for the skillicons service.
//!
//! This crate provides:
//! - The icon registry, built once at startup from SVG assets packaged at
//!   build time (or loaded from a directory / JSON map at runtime)
//! - Short-name alias resolution with theme-variant suffixing
//! - The grid compositor that assembles many icons into one SVG document
//!
//! Everything here is pure and synchronous. A registry is immutable once
//! built, so it can be shared across request handlers behind an `Arc`.

pub mod alias;
pub mod compositor;
mod error;
pub mod registry;

pub use alias::{AliasTable, Resolver};
pub use compositor::{Alignment, Compositor, DEFAULT_PER_LINE, GridGeometry, Layout};
pub use error::{Error, Result};
pub use registry::{IconRegistry, THEMES, base_name, theme_suffix};
