use museum_layout::prelude::*;
use museum_layout_examples::{init_tracing, render_layout_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // Nine full rings plus a partial tenth.
    let count = 19 * 19 + 12;
    let cells = generate(count);

    let rc = RenderConfig::new(20).with_background([28, 28, 28]).with_path_color([230, 230, 230]);
    render_layout_to_png(&cells, &rc, "layout-spiral.png")?;

    let cells = spiral_positions_with(count, Winding::Clockwise);
    render_layout_to_png(&cells, &RenderConfig::default(), "layout-spiral-clockwise.png")?;
    Ok(())
}
