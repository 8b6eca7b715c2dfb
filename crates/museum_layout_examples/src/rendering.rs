use std::path::Path;

use glam::IVec2;
use image::{Rgb, RgbImage};
use museum_layout::prelude::ring_of;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Appearance of a rendered layout.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Pixel size of one lattice cell.
    pub cell_px: u32,
    /// Gap left empty around the outermost ring, in cells.
    pub margin_cells: u32,
    pub background: [u8; 3],
    pub path_color: [u8; 3],
    /// Cell colours cycled by ring.
    pub ring_colors: Vec<[u8; 3]>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_px: 24,
            margin_cells: 1,
            background: [242, 242, 242],
            path_color: [60, 60, 60],
            ring_colors: vec![[200, 60, 60], [60, 120, 200], [70, 160, 90], [220, 160, 40]],
        }
    }
}

impl RenderConfig {
    pub fn new(cell_px: u32) -> Self {
        Self {
            cell_px: cell_px.max(4),
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_path_color(mut self, color: [u8; 3]) -> Self {
        self.path_color = color;
        self
    }

    fn ring_color(&self, ring: i32) -> [u8; 3] {
        if self.ring_colors.is_empty() {
            return self.path_color;
        }
        self.ring_colors[ring as usize % self.ring_colors.len()]
    }
}

/// Draws `cells` as squares coloured by ring, joined in order by a path, and saves a PNG.
///
/// The image is y-up: larger `y` is drawn higher.
pub fn render_layout_to_png(
    cells: &[IVec2],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let extent = cells.iter().copied().map(ring_of).max().unwrap_or(0);
    let side_cells = (2 * extent as u32 + 1) + 2 * config.margin_cells;
    let side = side_cells * config.cell_px;
    let mut img = RgbImage::from_pixel(side, side, Rgb(config.background));

    let half = config.cell_px as i32 / 2;
    let center = |c: IVec2| -> (i32, i32) {
        let col = c.x + extent + config.margin_cells as i32;
        let row = extent - c.y + config.margin_cells as i32;
        (
            col * config.cell_px as i32 + half,
            row * config.cell_px as i32 + half,
        )
    };

    let inset = (config.cell_px as i32 * 3) / 10;
    for &cell in cells {
        let (cx, cy) = center(cell);
        fill_rect(
            &mut img,
            cx - half + inset,
            cy - half + inset,
            cx + half - inset,
            cy + half - inset,
            config.ring_color(ring_of(cell)),
        );
    }

    for w in cells.windows(2) {
        let (x0, y0) = center(w[0]);
        let (x1, y1) = center(w[1]);
        draw_axis_line(&mut img, x0, y0, x1, y1, config.path_color);
    }

    let path = path.as_ref();
    img.save(path)?;
    info!("Wrote {} cells to {}.", cells.len(), path.display());
    Ok(())
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn fill_rect(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: [u8; 3]) {
    for y in y0..y1 {
        for x in x0..x1 {
            put(img, x, y, color);
        }
    }
}

/// Consecutive spiral cells differ along one axis only.
fn draw_axis_line(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: [u8; 3]) {
    for x in x0.min(x1)..=x0.max(x1) {
        for y in y0.min(y1)..=y0.max(y1) {
            put(img, x, y, color);
        }
    }
}
