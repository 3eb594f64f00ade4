//! Build script for skillicons-core.
//!
//! Packages every `assets/*.svg` file into a generated lookup table that is
//! compiled into the crate with `include_str!`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets_dir = manifest_dir.join("assets");
    let out_path = PathBuf::from(env::var("OUT_DIR")?).join("embedded_icons.rs");

    let mut icons = Vec::new();
    for entry in fs::read_dir(&assets_dir)? {
        let path = entry?.path();
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            icons.push((stem.to_lowercase(), path.display().to_string()));
        }
    }
    icons.sort();

    let mut code = String::from("pub(crate) static EMBEDDED_ICONS: &[(&str, &str)] = &[\n");
    for (name, path) in &icons {
        writeln!(code, "    ({name:?}, include_str!({path:?})),")?;
    }
    code.push_str("];\n");

    fs::write(&out_path, code)?;

    // Re-run when assets are added, removed or edited
    println!("cargo:rerun-if-changed=assets");

    Ok(())
}
