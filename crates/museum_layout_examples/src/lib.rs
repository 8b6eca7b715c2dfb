#![forbid(unsafe_code)]

mod catalog;
mod rendering;

pub use catalog::{load_catalog, manifest_path};
pub use rendering::{init_tracing, render_layout_to_png, RenderConfig};
