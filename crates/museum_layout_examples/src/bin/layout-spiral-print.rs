use museum_layout::prelude::*;
use museum_layout_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let count = 25usize;

    // Same walk, both reporting conventions.
    let ccw = generate(count);
    let cw = spiral_positions_with(count, Winding::Clockwise);

    for (i, (a, b)) in ccw.iter().zip(&cw).enumerate() {
        info!(
            "#{i:>3}  ccw ({:>2}, {:>2})  cw ({:>2}, {:>2})  ring {}",
            a.x,
            a.y,
            b.x,
            b.y,
            ring_of(*a)
        );
    }
    info!("Extent of {count} cells: {}.", spiral_extent(count));

    // Signed counts go through the checked entry point.
    if let Err(e) = try_spiral_positions(-3) {
        info!("Rejected: {e}.");
    }
    Ok(())
}
