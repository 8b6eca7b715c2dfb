use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use museum_layout::prelude::Catalog;
use tracing::info;

/// Path relative to this crate's manifest directory.
pub fn manifest_path(relative: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Reads a JSON exhibit catalog.
pub fn load_catalog(path: impl AsRef<Path>) -> anyhow::Result<Catalog> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog: Catalog =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!("Loaded {} exhibits from {}.", catalog.len(), path.display());
    Ok(catalog)
}
