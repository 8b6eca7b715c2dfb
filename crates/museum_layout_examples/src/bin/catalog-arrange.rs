use glam::Vec3;
use museum_layout::prelude::*;
use museum_layout_examples::{init_tracing, load_catalog, manifest_path};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let catalog = load_catalog(manifest_path("assets/data.json"))?;

    let config = ArrangeConfig::new().with_spacing(1.0).with_fill(0.9);
    let arrangement = arrange_spiral(&catalog, &config)?;

    // Placeholder endpoints; supply real ones from your deployment.
    let media = MediaConfig::new("https://cdn.example.org/museum/objects").with_map(
        StaticMapConfig::new("curator", "museum-style", "YOUR_ACCESS_TOKEN"),
    );

    for placement in arrangement.placements() {
        let Some(exhibit) = catalog.get(&placement.exhibit_id) else {
            continue;
        };
        info!(
            "{:>2} {:<18} cell ({:>2}, {:>2}) world {:?}",
            placement.index, exhibit.name, placement.cell.x, placement.cell.y, placement.world
        );
        info!("   low  {}", media.model_url(&exhibit.id, ModelDetail::Low));
        info!("   high {}", media.model_url(&exhibit.id, ModelDetail::High));
        if let Some(url) = media.map_thumbnail_url(exhibit.location) {
            info!("   map  {url}");
        }
    }

    // A model whose bounding box is 0.4 x 1.8 x 0.6 is scaled to fill 90% of a cell.
    let scale = config.fit_scale(Vec3::new(0.4, 1.8, 0.6));
    info!(
        "Arranged {} exhibits out to ring {}; sample fit scale {scale:.3}.",
        arrangement.len(),
        arrangement.extent()
    );
    Ok(())
}
