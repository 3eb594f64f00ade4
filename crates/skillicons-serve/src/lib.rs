//! skillicons - composite SVG images of technology icons.
//!
//! This crate provides a small HTTP server that turns a list of short icon
//! names into one SVG laid out on a grid, meant to be embedded in READMEs
//! and documentation through a single URL. It is designed to sit behind a
//! CDN: every response is a pure function of its query string.
//!
//! # Architecture
//!
//! - **Registry**: icons packaged at build time (or loaded from disk), built
//!   once at startup and shared read-only
//! - **Resolve**: short names and aliases mapped to canonical, themed keys
//! - **Composite**: fragments placed on a fixed grid with scaled geometry
//! - **Cache**: in-process moka cache + long-lived Cache-Control headers
//!
//! # URL Pattern
//!
//! ```text
//! GET /api/icons?i=js,ts,rust&theme=dark&perline=8&align=center&titles
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::ServeError;
pub use routes::router;
pub use state::AppState;
